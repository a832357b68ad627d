#![allow(nonstandard_style)]

use clap::{Arg, ArgAction, Command, value_parser};

use pairing_gen::mnt6;

fn main() {
    let matches = Command::new("mnt6")
        .about("MNT parameter triples (q, n, d) with embedding degree 6")
        .arg(
            Arg::new("N")
                .long("N")
                .required(true)
                .value_name("BITS_OF_Q")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("z")
                .long("z")
                .required(true)
                .value_name("MAX_DISC")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set),
        )
        .get_matches();

    let N = *matches.get_one::<u32>("N").unwrap();
    let z = *matches.get_one::<u64>("z").unwrap();

    match mnt6::gen_curve(N, z) {
        Ok(t) => println!("(q, n, d) = ({}, {}, {})", t.q, t.n, t.d),
        Err(e) => {
            eprintln!("mnt6: {e}");
            std::process::exit(1);
        }
    }
}
