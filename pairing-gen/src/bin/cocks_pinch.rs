#![allow(nonstandard_style)]

use clap::{Arg, ArgAction, Command, value_parser};

use pairing_algebra::hilbert::HilbertTable;
use pairing_algebra::seeded_rng;
use pairing_gen::cocks_pinch;

fn main() {
    let matches = Command::new("cocks-pinch")
        .about("Cocks-Pinch curves with a prescribed embedding degree")
        .arg(
            Arg::new("num-curves")
                .long("num-curves")
                .default_value("1")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("B")
                .long("B")
                .required(true)
                .value_name("EMBEDDING_DEGREE")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("num-bits")
                .long("num-bits")
                .required(true)
                .value_name("BITS_OF_N")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .get_matches();

    let num_curves = *matches.get_one::<u32>("num-curves").unwrap();
    let B = *matches.get_one::<u32>("B").unwrap();
    let num_bits = *matches.get_one::<u32>("num-bits").unwrap();

    let mut rng = seeded_rng();
    match cocks_pinch::gen_curves(num_curves, B, num_bits, &HilbertTable, &mut rng) {
        Ok(all) => {
            for params in all {
                println!("{params}\n");
            }
        }
        Err(e) => {
            eprintln!("cocks-pinch: {e}");
            std::process::exit(1);
        }
    }
}
