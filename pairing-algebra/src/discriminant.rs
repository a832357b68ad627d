use anyhow::bail;
use rug::{Integer, ops::RemRounding, rand::RandState};

use crate::arith;
use crate::is_prime;

/// Random small fundamental discriminant $D < 0$ with
/// $\left(\frac{D}{n}\right) = 1$. Half of all discriminants split in
/// a given field, so a couple of draws suffice on average.
pub fn find_fundamental_discriminant(n: &Integer, rng: &mut RandState) -> anyhow::Result<Integer> {
    for _ in 0..256 {
        let t: Integer = Integer::from(Integer::from(1000).random_below_ref(rng)) + 1;
        let d = arith::fundamental_discriminant(&-t);
        if d.clone().kronecker(n) == 1 {
            return Ok(d);
        }
    }
    bail!("no split fundamental discriminant below 1000 for n = {n}");
}

/// Random prime with exactly `num_bits` bits and $n \equiv 1 \bmod B$.
pub fn find_prime(num_bits: u32, B: &Integer, rng: &mut RandState) -> anyhow::Result<Integer> {
    let lo = Integer::from(1) << (num_bits - 1);
    for _ in 0..20000 {
        let r = Integer::from(lo.random_below_ref(rng)) + &lo;
        // snap down onto the residue class 1 mod B
        let n: Integer = r.clone() - r.rem_euc(B) + 1;
        if n.significant_bits() == num_bits && is_prime(&n) {
            return Ok(n);
        }
    }
    bail!("no {num_bits}-bit prime = 1 mod {B} found");
}

/// Element of exact multiplicative order `B` in $F_n^*$. Requires
/// $B \mid n - 1$.
pub fn find_element_of_order(B: &Integer, n: &Integer, rng: &mut RandState) -> anyhow::Result<Integer> {
    let e = Integer::from(n - 1) / B;
    'outer: for _ in 0..256 {
        let h: Integer = Integer::from(Integer::from(n - 2).random_below_ref(rng)) + 2;
        let g = h.pow_mod(&e, n).unwrap();
        if g == 1 {
            continue;
        }
        // ord(g) divides B; walk the powers to pin it down exactly
        let mut acc = Integer::from(1);
        let mut i = Integer::from(1);
        while i < *B {
            acc = (acc * &g).rem_euc(n);
            if acc == 1 {
                continue 'outer;
            }
            i += 1;
        }
        return Ok(g);
    }
    bail!("no element of order {B} in F_{n}");
}
