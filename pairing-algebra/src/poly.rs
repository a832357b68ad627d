//! Dense univariate polynomials over `F_p`, just enough machinery to
//! pull a root out of a Hilbert class polynomial: modular reduction,
//! division, gcd, powering modulo a polynomial, and root extraction
//! via equal-degree splitting.

use rug::{Integer, ops::RemRounding, rand::RandState};

/// Ascending coefficients, invariant: no trailing zero (except the
/// zero polynomial, which is the empty vector).
type Coeffs = Vec<Integer>;

fn trim(mut c: Coeffs) -> Coeffs {
    while c.last().map_or(false, |x| *x == 0) {
        c.pop();
    }
    c
}

fn reduce(coeffs: &[Integer], p: &Integer) -> Coeffs {
    trim(coeffs.iter().map(|c| c.clone().rem_euc(p)).collect())
}

fn deg(c: &[Integer]) -> usize {
    // Degree of the zero polynomial is never consulted here.
    c.len().saturating_sub(1)
}

fn eval(coeffs: &[Integer], x: &Integer, p: &Integer) -> Integer {
    let mut acc = Integer::from(0);
    for c in coeffs.iter().rev() {
        acc = (acc * x + c).rem_euc(p);
    }
    acc
}

fn sub(a: &[Integer], b: &[Integer], p: &Integer) -> Coeffs {
    let n = a.len().max(b.len());
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let x = a.get(i).cloned().unwrap_or_default();
        let y = b.get(i).cloned().unwrap_or_default();
        out.push((x - y).rem_euc(p));
    }
    trim(out)
}

fn mul(a: &[Integer], b: &[Integer], p: &Integer) -> Coeffs {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![Integer::from(0); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] += Integer::from(x * y);
        }
    }
    trim(out.into_iter().map(|c| c.rem_euc(p)).collect())
}

/// Remainder of `a` modulo `b`; `b` nonzero.
fn rem(a: &[Integer], b: &[Integer], p: &Integer) -> Coeffs {
    let mut r: Coeffs = a.to_vec();
    let lead_inv = b
        .last()
        .unwrap()
        .clone()
        .invert(p)
        .expect("leading coefficient invertible mod prime p");
    while r.len() >= b.len() {
        let shift = r.len() - b.len();
        let q = (r.last().unwrap() * lead_inv.clone()).rem_euc(p);
        for (i, c) in b.iter().enumerate() {
            let t = Integer::from(c * &q).rem_euc(p);
            r[shift + i] = (r[shift + i].clone() - t).rem_euc(p);
        }
        // The leading term cancels exactly.
        r.pop();
        r = trim(r);
    }
    r
}

fn gcd(a: &[Integer], b: &[Integer], p: &Integer) -> Coeffs {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    while !b.is_empty() {
        let r = rem(&a, &b, p);
        a = b;
        b = r;
    }
    monic(a, p)
}

fn monic(c: Coeffs, p: &Integer) -> Coeffs {
    match c.last() {
        None => c,
        Some(lead) => {
            let inv = lead.clone().invert(p).unwrap();
            trim(
                c.iter()
                    .map(|x| Integer::from(x * &inv).rem_euc(p))
                    .collect(),
            )
        }
    }
}

/// `base^e mod (f, p)` by square-and-multiply on the exponent's bits.
fn pow_mod(base: &[Integer], e: &Integer, f: &[Integer], p: &Integer) -> Coeffs {
    let mut acc = vec![Integer::from(1)];
    let mut sq = rem(base, f, p);
    for i in 0..e.significant_bits() {
        if e.get_bit(i) {
            acc = rem(&mul(&acc, &sq, p), f, p);
        }
        sq = rem(&mul(&sq, &sq, p), f, p);
    }
    acc
}

/// One root of `coeffs` over `F_p`, if any.
///
/// Small fields are scanned directly. Otherwise the linear-factor part
/// `gcd(x^p - x, f)` is split by the Cantor-Zassenhaus step
/// `gcd((x + a)^((p-1)/2) - 1, g)` for random `a` until a linear
/// factor remains.
pub fn any_root(coeffs: &[Integer], p: &Integer, rng: &mut RandState) -> Option<Integer> {
    let f = reduce(coeffs, p);
    if f.len() <= 1 {
        return None;
    }

    if *p < 4096 {
        let bound = p.to_u64().unwrap();
        for x in 0..bound {
            let x = Integer::from(x);
            if eval(&f, &x, p) == 0 {
                return Some(x);
            }
        }
        return None;
    }

    let x_poly = vec![Integer::from(0), Integer::from(1)];
    let xp = pow_mod(&x_poly, p, &f, p);
    let mut g = gcd(&sub(&xp, &x_poly, p), &f, p);
    if g.len() <= 1 {
        return None;
    }

    // Each draw splits with probability about 1/2.
    let half: Integer = Integer::from(p - 1) >> 1;
    for _ in 0..128 {
        if deg(&g) == 1 {
            break;
        }
        let a = p.clone().random_below(rng);
        let shifted = vec![a, Integer::from(1)];
        let h = sub(&pow_mod(&shifted, &half, &g, p), &[Integer::from(1)], p);
        let d = gcd(&h, &g, p);
        if d.len() > 1 && deg(&d) < deg(&g) {
            g = d;
        }
    }
    if deg(&g) != 1 {
        return None;
    }
    // monic linear factor x + g0
    let g0 = g[0].clone();
    Some((-g0).rem_euc(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng_from_seed;

    fn ints(v: &[i64]) -> Vec<Integer> {
        v.iter().map(|&x| Integer::from(x)).collect()
    }

    #[test]
    fn roots_by_scan() {
        let mut rng = rng_from_seed(7);
        let p = Integer::from(11);
        // (x - 3)(x - 7) = x^2 - 10x + 21
        let f = ints(&[21, -10, 1]);
        let r = any_root(&f, &p, &mut rng).unwrap();
        assert!(r == 3 || r == 7);
        // x^2 + 1 has no root mod 11
        assert_eq!(any_root(&ints(&[1, 0, 1]), &p, &mut rng), None);
    }

    #[test]
    fn roots_by_splitting() {
        let mut rng = rng_from_seed(7);
        let p = Integer::from(1000000007i64);
        // (x - 123456)(x - 789)
        let f = ints(&[123456 * 789, -(123456 + 789), 1]);
        let r = any_root(&f, &p, &mut rng).unwrap();
        assert!(r == 123456 || r == 789);
        assert_eq!(eval(&reduce(&f, &p), &r, &p), 0);
        // p = 3 mod 4, so x^2 + 1 is irreducible
        assert_eq!(any_root(&ints(&[1, 0, 1]), &p, &mut rng), None);
    }

    #[test]
    fn cubic_root_mod_large_prime() {
        let mut rng = rng_from_seed(13);
        let p = Integer::from(2147483647i64);
        // (x - 2)(x - 3)(x - 5)
        let f = ints(&[-30, 31, -10, 1]);
        let r = any_root(&f, &p, &mut rng).unwrap();
        assert!(r == 2 || r == 3 || r == 5);
    }
}
