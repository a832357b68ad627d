use anyhow::{bail, ensure};
use rug::Integer;

use pairing_algebra::arith;
use pairing_algebra::curve::Curve;
use pairing_algebra::embedding::exact_embedding_degree;
use pairing_algebra::is_prime;
use pairing_algebra::point::Point;

use crate::CurveParams;

/// $P(x) = 36x^4 + 36x^3 + 24x^2 + 6x + 1$, the BN field-size
/// polynomial. [BarretoNaehrig2005]
fn P(x: &Integer) -> Integer {
    let mut v = Integer::from(36) * x + 36;
    v = v * x + 24;
    v = v * x + 6;
    v * x + 1
}

/// Barreto-Naehrig curves of embedding degree 12: scan the family
/// parameter `u` upward from $-\lfloor(2^m/36)^{1/4}\rfloor$ so that
/// the first candidates have about `m`-bit fields, and stop once both
/// branches exceed `p_max` bits. Yields up to `num_curves` sets;
/// fewer (possibly none) when the window is exhausted.
pub fn gen_curves(num_curves: u32, m: u32, p_max: u32) -> anyhow::Result<Vec<CurveParams>> {
    ensure!(m >= 5, "m = {m} leaves no room for the family polynomial");
    let mut out = Vec::new();

    let mut u = -((Integer::from(1) << m) / 36u32).root(4);
    while (out.len() as u32) < num_curves {
        let p_neg = P(&Integer::from(-&u));
        let p_pos = P(&u);
        if p_neg.significant_bits().min(p_pos.significant_bits()) > p_max {
            break;
        }
        let t = Integer::from(6) * u.clone().square() + 1;
        for pc in [&p_neg, &p_pos] {
            let n = Integer::from(pc + 1u32) - &t;
            if n > 3 && is_prime(pc) && is_prime(&n) {
                out.push(curve_for(pc, &n)?);
                break;
            }
        }
        u += 1;
    }
    Ok(out)
}

/// The curve constant scan: $y^2 = x^3 + b$ with $(1, \sqrt{b+1})$ on
/// it, advancing `b` until that point has order `n`.
fn curve_for(p: &Integer, n: &Integer) -> anyhow::Result<CurveParams> {
    for b in 1u32..=10000 {
        let rhs = Integer::from(b + 1);
        if !arith::is_quadratic_residue(rhs.clone(), p.clone()) {
            continue;
        }
        let e = match Curve::new(p.clone(), Integer::new(), Integer::from(b)) {
            Ok(e) => e,
            Err(_) => continue,
        };
        let y0 = match arith::mod_sqrt(rhs, p.clone()) {
            Some(y0) => y0,
            None => continue,
        };
        let g = Point::affine(Integer::from(1), y0);
        if !e.mul(n, &g).is_infinity() {
            continue;
        }
        ensure!(
            exact_embedding_degree(p, n, 12),
            "BN pair p = {p}, n = {n} does not have embedding degree 12"
        );
        return Ok(CurveParams {
            curve: e,
            n: n.clone(),
            r: Integer::from(1),
            generator: g,
            k: Some(12),
            disc: Some(Integer::from(-3)),
        });
    }
    bail!("no curve constant b found for p = {p}");
}
