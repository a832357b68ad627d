use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use rug::Integer;

use pairing_algebra::hilbert::HilbertTable;
use pairing_algebra::seeded_rng;
use pairing_gen::cm;

fn int_arg(matches: &ArgMatches, name: &str) -> Integer {
    let s = matches.get_one::<String>(name).unwrap();
    Integer::from_str(s).unwrap_or_else(|_| {
        eprintln!("-{name} expects an integer, got '{s}'");
        std::process::exit(2);
    })
}

fn main() {
    let matches = Command::new("cm")
        .about("CM curve for a chosen field prime, subgroup order and cofactor")
        .arg(
            Arg::new("p")
                .short('p')
                .required(true)
                .value_name("PRIME")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("n")
                .short('n')
                .required(true)
                .value_name("ORDER")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("r")
                .short('r')
                .required(true)
                .value_name("COFACTOR")
                .action(ArgAction::Set),
        )
        .get_matches();

    let p = int_arg(&matches, "p");
    let n = int_arg(&matches, "n");
    let r = int_arg(&matches, "r");

    let mut rng = seeded_rng();
    match cm::gen_curve(&p, &n, &r, &HilbertTable, &mut rng) {
        Ok(params) => println!("{params}"),
        Err(e) => {
            eprintln!("cm: {e}");
            std::process::exit(1);
        }
    }
}
