use anyhow::{bail, ensure};
use rug::{Integer, ops::RemRounding, rand::RandState};

use pairing_algebra::arith;
use pairing_algebra::discriminant::{find_element_of_order, find_fundamental_discriminant, find_prime};
use pairing_algebra::embedding::exact_embedding_degree;
use pairing_algebra::hilbert::{class_poly_root, ClassPolynomial};
use pairing_algebra::is_prime;

use crate::cm::twist_with_point;
use crate::CurveParams;

const MAX_ATTEMPTS: u32 = 50000;

/// Cocks-Pinch: prescribe the embedding degree `B` and search for a
/// matching field prime. The subgroup order `n` is drawn first, `p`
/// falls out of $p = (t^2 - D y^2) / 4$ with $t = z + 1$ for `z` of
/// order `B` in $F_n^*$.
pub fn gen_curve(
    B: u32,
    num_bits: u32,
    oracle: &dyn ClassPolynomial,
    rng: &mut RandState,
) -> anyhow::Result<CurveParams> {
    ensure!(B >= 2, "embedding degree must be at least 2");
    ensure!(num_bits >= 4, "num_bits = {num_bits} is too small");
    let B_int = Integer::from(B);

    for _ in 0..MAX_ATTEMPTS {
        let n = find_prime(num_bits, &B_int, rng)?;

        // a split discriminant the class polynomial oracle knows
        let mut D = Integer::new();
        for _ in 0..32 {
            let d = find_fundamental_discriminant(&n, rng)?;
            if oracle.supports(&d) {
                D = d;
                break;
            }
        }
        if D == 0 {
            continue;
        }

        let z = find_element_of_order(&B_int, &n, rng)?;
        let t = (z + 1u32).rem_euc(&n);

        // sqrt exists because (D/n) = 1
        let s = match arith::mod_sqrt(D.clone(), n.clone()) {
            Some(s) => s,
            None => continue,
        };
        let y = ((t.clone() - 2u32) * s.invert(&n).unwrap()).rem_euc(&n);

        let num = t.clone().square() - Integer::from(&D * &y) * &y;
        if !num.is_divisible(&Integer::from(4)) {
            continue;
        }
        let p = num / 4u32;
        if p <= 3 || !is_prime(&p) {
            continue;
        }
        let cofactor_times_n = Integer::from(&p + 1u32) - &t;
        if !cofactor_times_n.is_divisible(&n) {
            continue;
        }
        let r = cofactor_times_n / &n;

        let j0 = class_poly_root(oracle, &D, &p, rng)?;
        let (curve, generator) = twist_with_point(&p, &j0, &n, &r, rng)?;

        // the construction makes p = z mod n of order exactly B;
        // anything else is a defect, not a retry
        ensure!(
            exact_embedding_degree(&p, &n, B),
            "constructed p = {p} does not have embedding degree {B} mod {n}"
        );

        return Ok(CurveParams {
            curve,
            n,
            r,
            generator,
            k: Some(B),
            disc: Some(D),
        });
    }
    bail!("no Cocks-Pinch curve with k = {B} at {num_bits} bits after {MAX_ATTEMPTS} attempts");
}

/// Up to `num_curves` independent parameter sets.
pub fn gen_curves(
    num_curves: u32,
    B: u32,
    num_bits: u32,
    oracle: &dyn ClassPolynomial,
    rng: &mut RandState,
) -> anyhow::Result<Vec<CurveParams>> {
    let mut out = Vec::with_capacity(num_curves as usize);
    for _ in 0..num_curves {
        out.push(gen_curve(B, num_bits, oracle, rng)?);
    }
    Ok(out)
}
