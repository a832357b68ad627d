#![allow(nonstandard_style)]

use rand::RngCore;
use rug::{Integer, rand::RandState};

pub mod arith;
pub mod cornacchia;
pub mod curve;
pub mod discriminant;
pub mod embedding;
pub mod hilbert;
pub mod pell;
pub mod point;
pub mod poly;

/// Do NOT use `RandState::new()` directly !
/// Unseeded, every process would draw the same GMP default stream.
pub fn seeded_rng() -> RandState<'static> {
    let mut buf = [0u8; 32];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut buf);
    let seed = Integer::from_digits(&buf, rug::integer::Order::Lsf);
    let mut rng = RandState::new();
    rng.seed(&seed);
    rng
}

/// Reproducible stream for tests and scripted searches.
pub fn rng_from_seed(seed: u64) -> RandState<'static> {
    let mut rng = RandState::new();
    rng.seed(&Integer::from(seed));
    rng
}

/// Primality as the rest of the crate consumes it. GMP runs
/// Baillie-PSW plus the requested Miller-Rabin rounds.
pub fn is_prime(n: &Integer) -> bool {
    n.is_probably_prime(40) != rug::integer::IsPrime::No
}
