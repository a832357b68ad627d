use anyhow::{bail, ensure};
use rug::{Integer, ops::RemRounding, rand::RandState};

use pairing_algebra::arith;
use pairing_algebra::curve::Curve;
use pairing_algebra::hilbert::{class_poly_root, ClassPolynomial};
use pairing_algebra::is_prime;
use pairing_algebra::point::Point;

use crate::CurveParams;

/// Generic CM construction: the caller fixes the field prime `p`, a
/// subgroup prime `n` and a cofactor `r` with $r n$ inside the Hasse
/// interval. The discriminant falls out of the trace decomposition
/// $4p - t^2 = d_0 v^2$. [Cohen1993, Chapter 7]
pub fn gen_curve(
    p: &Integer,
    n: &Integer,
    r: &Integer,
    oracle: &dyn ClassPolynomial,
    rng: &mut RandState,
) -> anyhow::Result<CurveParams> {
    ensure!(*p > 3 && is_prime(p), "p = {p} must be a prime above 3");
    ensure!(is_prime(n), "subgroup order n = {n} must be prime");
    ensure!(*r >= 1, "cofactor r = {r} must be positive");

    let N = Integer::from(r * n);
    let t = Integer::from(p + 1) - &N;
    ensure!(
        t.clone().square() <= Integer::from(4) * p,
        "r * n = {N} violates the Hasse bound for p = {p}"
    );

    let dv2 = Integer::from(4) * p - t.square();
    if dv2 == 0 {
        bail!("trace is extremal, no imaginary quadratic order to use");
    }
    let (d0, _) = arith::squarefree_decompose(&dv2);
    let disc = if Integer::from(-&d0).rem_euc(Integer::from(4)) == 1 {
        -d0
    } else {
        Integer::from(-4) * d0
    };

    let j0 = class_poly_root(oracle, &disc, p, rng)?;
    let (curve, generator) = twist_with_point(p, &j0, n, r, rng)?;
    Ok(CurveParams {
        curve,
        n: n.clone(),
        r: r.clone(),
        generator,
        k: None,
        disc: Some(disc),
    })
}

/// Walk the twist family of `j0` until one member carries a point of
/// order `n` after clearing the cofactor `r`.
pub(crate) fn twist_with_point(
    p: &Integer,
    j0: &Integer,
    n: &Integer,
    r: &Integer,
    rng: &mut RandState,
) -> anyhow::Result<(Curve, Point)> {
    for c in 1u32..=64 {
        let c = Integer::from(c);
        if c.clone().rem_euc(p) == 0 {
            continue;
        }
        let e = Curve::from_j_invariant(p, j0, &c)?;
        // wrong twists fail the order check almost immediately
        if let Ok(g) = e.prime_order_point(r, n, rng) {
            return Ok((e, g));
        }
    }
    bail!("no twist of j = {j0} over F_{p} has an n = {n} point");
}
