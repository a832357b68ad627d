use anyhow::{bail, ensure};
use rug::{Integer, ops::{DivRounding, RemRounding}};
use serde::Serialize;

use pairing_algebra::arith;
use pairing_algebra::is_prime;
use pairing_algebra::pell::{pell_solve_1, pell_solve_2};

/// MNT output is a parameter triple, not a constructed curve: the
/// curve itself needs the CM machinery for discriminant `3d`, which
/// the caller runs separately once `d` is known.
#[derive(Clone, Debug, Serialize)]
pub struct Mnt6Params {
    pub q: Integer,
    pub n: Integer,
    pub d: Integer,
}

/// MNT curves with embedding degree 6: field sizes are $q = 4l^2 + 1$
/// and group orders $n = 4l^2 \mp 2l + 1$, where $x = 6l \pm 1$ runs
/// over solutions of $x^2 - D y^2 = -8$ for $D = 3d$. Each base
/// solution is pushed along its orbit under the fundamental unit of
/// $x^2 - Dy^2 = 1$ until $|x|$ outgrows the target bit length `N`.
/// [MiyajiNakabayashiTakano2001]
pub fn gen_curve(N: u32, z: u64) -> anyhow::Result<Mnt6Params> {
    ensure!(N >= 5, "bit target N = {N} is too small");
    let bound = Integer::from(4) << ((N + 1) / 2);
    let lo = Integer::from(1) << (N - 3);
    let hi = Integer::from(1) << (N - 2);
    let m = Integer::from(-8);

    let mut D = 9u64;
    while D <= 3 * z {
        let D_int = Integer::from(D);
        if !arith::is_squarefree(&Integer::from(D / 3)) || D_int.is_perfect_square() {
            D += 24;
            continue;
        }
        // -2 must be a square mod D for -8 to be representable
        if !arith::is_square_mod(&Integer::from(-2), D) {
            D += 24;
            continue;
        }
        let sols = if D > 64 {
            pell_solve_1(&D_int, &m)
        } else {
            pell_solve_2(&D_int, &m)
        };
        let Some((x0, y0)) = sols.into_iter().next() else {
            D += 24;
            continue;
        };
        let (u, v) = pell_solve_1(&D_int, &Integer::from(1))
            .into_iter()
            .next()
            .unwrap();

        // forward orbit of the base solution
        let mut x = x0.clone();
        let mut y = y0.clone();
        let mut rem = residue(&x);
        if rem != 0 {
            while x.clone().abs() <= bound {
                let l = Integer::from(&x - rem).div_floor(Integer::from(6));
                if let Some(found) = check(&l, rem, &lo, &hi, D) {
                    return Ok(found);
                }
                let nx = Integer::from(&x * &u) + Integer::from(&y * &v) * &D_int;
                y = Integer::from(&x * &v) + Integer::from(&u * &y);
                x = nx;
            }
        }

        // the conjugate orbit, stepping by the inverse unit
        let mut x = Integer::from(&x0 * &u) - Integer::from(&y0 * &v) * &D_int;
        let mut y = Integer::from(&u * &y0) - Integer::from(&x0 * &v);
        rem = residue(&x);
        if rem != 0 {
            while x.clone().abs() <= bound {
                let l = Integer::from(&x - rem).div_floor(Integer::from(6));
                if l < 0 {
                    break;
                }
                if let Some(found) = check(&l, rem, &lo, &hi, D) {
                    return Ok(found);
                }
                let nx = Integer::from(&x * &u) - Integer::from(&y * &v) * &D_int;
                y = Integer::from(&u * &y) - Integer::from(&x * &v);
                x = nx;
            }
        }

        D += 24;
    }
    bail!("no MNT6 parameters with {N}-bit q and d <= {z}");
}

/// `1` or `-1` when `x = 6l + rem` for some integer `l`, else `0`.
fn residue(x: &Integer) -> i32 {
    match x.clone().rem_euc(Integer::from(6)).to_i32().unwrap() {
        1 => 1,
        5 => -1,
        _ => 0,
    }
}

fn check(l: &Integer, rem: i32, lo: &Integer, hi: &Integer, D: u64) -> Option<Mnt6Params> {
    if *l <= 0 {
        return None;
    }
    let lsq = l.clone().square();
    if lsq < *lo || lsq >= *hi {
        return None;
    }
    let q = Integer::from(4) * &lsq + 1;
    let n = Integer::from(4) * lsq - Integer::from(2 * rem) * l + 1;
    if is_prime(&q) && is_prime(&n) {
        return Some(Mnt6Params {
            q,
            n,
            d: Integer::from(D / 3),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_classes() {
        assert_eq!(residue(&Integer::from(7)), 1);
        assert_eq!(residue(&Integer::from(-7)), -1);
        assert_eq!(residue(&Integer::from(71)), -1);
        assert_eq!(residue(&Integer::from(12)), 0);
    }
}
