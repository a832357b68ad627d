use clap::{Arg, ArgAction, Command, value_parser};

use pairing_gen::bn;

fn main() {
    let matches = Command::new("bn")
        .about("Barreto-Naehrig curves of embedding degree 12")
        .arg(
            Arg::new("num-curves")
                .long("num-curves")
                .default_value("1")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("m")
                .long("m")
                .required(true)
                .value_name("START_BITS")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("p-max")
                .long("p-max")
                .required(true)
                .value_name("MAX_BITS")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .get_matches();

    let num_curves = *matches.get_one::<u32>("num-curves").unwrap();
    let m = *matches.get_one::<u32>("m").unwrap();
    let p_max = *matches.get_one::<u32>("p-max").unwrap();

    match bn::gen_curves(num_curves, m, p_max) {
        Ok(all) if all.is_empty() => {
            eprintln!("bn: no prime pair in the [{m}, {p_max}] bit window");
            std::process::exit(1);
        }
        Ok(all) => {
            for params in all {
                println!("{params}\n");
            }
        }
        Err(e) => {
            eprintln!("bn: {e}");
            std::process::exit(1);
        }
    }
}
