use anyhow::bail;
use rug::{Integer, ops::RemRounding, rand::RandState};
use serde::{Deserialize, Serialize};

use crate::arith;
use crate::curve::Curve;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Point {
    Infinity,
    Affine { x: Integer, y: Integer },
}

impl Point {
    pub fn affine(x: Integer, y: Integer) -> Point {
        Point::Affine { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Point::Infinity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

impl Curve {
    pub fn contains(&self, pt: &Point) -> bool {
        match pt {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = y.clone().square().rem_euc(&self.p);
                let rhs = self.rhs(x);
                lhs == rhs
            }
        }
    }

    /// $x^3 + a_4 x + a_6 \bmod p$
    fn rhs(&self, x: &Integer) -> Integer {
        ((x.clone().square() + &self.a4) * x + &self.a6).rem_euc(&self.p)
    }

    pub fn neg(&self, pt: &Point) -> Point {
        match pt {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: (-y.clone()).rem_euc(&self.p),
            },
        }
    }

    pub fn add(&self, a: &Point, b: &Point) -> Point {
        let p = &self.p;
        let (x1, y1, x2, y2) = match (a, b) {
            (Point::Infinity, _) => return b.clone(),
            (_, Point::Infinity) => return a.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        let lambda: Integer;
        if x1 == x2 {
            if Integer::from(y1 + y2).rem_euc(p) == 0 {
                return Point::Infinity;
            }
            // tangent slope, y1 != 0 here
            let num = (Integer::from(3) * x1.clone().square() + &self.a4).rem_euc(p);
            let den = (Integer::from(2) * y1).rem_euc(p).invert(p).unwrap();
            lambda = (num * den).rem_euc(p);
        } else {
            let num = Integer::from(y2 - y1).rem_euc(p);
            let den = Integer::from(x2 - x1).rem_euc(p).invert(p).unwrap();
            lambda = (num * den).rem_euc(p);
        }

        let x3 = (lambda.clone().square() - x1 - x2).rem_euc(p);
        let y3 = (lambda * Integer::from(x1 - &x3) - y1).rem_euc(p);
        Point::Affine { x: x3, y: y3 }
    }

    pub fn double(&self, pt: &Point) -> Point {
        self.add(pt, pt)
    }

    /// Left-to-right double-and-add. `k` must be nonnegative.
    pub fn mul(&self, k: &Integer, pt: &Point) -> Point {
        let mut acc = Point::Infinity;
        if *k <= 0 {
            return acc;
        }
        for i in (0..k.significant_bits()).rev() {
            acc = self.double(&acc);
            if k.get_bit(i) {
                acc = self.add(&acc, pt);
            }
        }
        acc
    }

    /// Uniform point sampling: draw x until the cubic is a square.
    /// About half the x-coordinates work, so the bound is generous.
    pub fn random_point(&self, rng: &mut RandState) -> anyhow::Result<Point> {
        for _ in 0..1000 {
            let x = Integer::from(self.p.random_below_ref(rng));
            let rhs = self.rhs(&x);
            if let Some(y) = arith::mod_sqrt(rhs, self.p.clone()) {
                return Ok(Point::Affine { x, y });
            }
        }
        bail!("no point found on {self} after 1000 draws");
    }

    /// Point of prime order `n` on a curve of order `r * n`:
    /// multiply random points by the cofactor `r` until the image is
    /// not the identity, then confirm `n` kills it.
    pub fn prime_order_point(
        &self,
        r: &Integer,
        n: &Integer,
        rng: &mut RandState,
    ) -> anyhow::Result<Point> {
        for _ in 0..100 {
            let g0 = self.random_point(rng)?;
            let g = self.mul(r, &g0);
            if g.is_infinity() {
                continue;
            }
            if !self.mul(n, &g).is_infinity() {
                bail!("curve order is not {r} * {n}: cleared point has wrong order");
            }
            return Ok(g);
        }
        bail!("all sampled points died under the cofactor {r}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng_from_seed;

    fn toy() -> Curve {
        // y^2 = x^3 + 2x + 3 over F_97, order 100
        Curve::new(Integer::from(97), Integer::from(2), Integer::from(3)).unwrap()
    }

    #[test]
    fn identities() {
        let e = toy();
        let mut rng = rng_from_seed(7);
        let g = e.random_point(&mut rng).unwrap();
        assert!(e.contains(&g));
        assert_eq!(e.add(&g, &Point::Infinity), g);
        assert_eq!(e.add(&Point::Infinity, &g), g);
        assert!(e.add(&g, &e.neg(&g)).is_infinity());
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let e = toy();
        let mut rng = rng_from_seed(8);
        let g = e.random_point(&mut rng).unwrap();
        let mut acc = Point::Infinity;
        for k in 0..25u32 {
            assert_eq!(e.mul(&Integer::from(k), &g), acc);
            assert!(e.contains(&acc));
            acc = e.add(&acc, &g);
        }
        // a*G + b*G = (a+b)*G
        let a = e.mul(&Integer::from(13), &g);
        let b = e.mul(&Integer::from(29), &g);
        assert_eq!(e.add(&a, &b), e.mul(&Integer::from(42), &g));
    }

    #[test]
    fn doubling_a_two_torsion_point_gives_infinity() {
        // y^2 = x^3 - x over F_23 has (0, 0) of order 2
        let e = Curve::new(Integer::from(23), Integer::from(-1), Integer::new()).unwrap();
        let t = Point::affine(Integer::new(), Integer::new());
        assert!(e.contains(&t));
        assert!(e.double(&t).is_infinity());
    }

    #[test]
    fn cofactor_clearing() {
        // |E(F_97)| for y^2 = x^3 + 2x + 3 is 100 = 4 * 25, but 25
        // is not prime; use n = 5, r = 20 instead.
        let e = toy();
        let mut rng = rng_from_seed(9);
        let n = Integer::from(5);
        let g = e
            .prime_order_point(&Integer::from(20), &n, &mut rng)
            .unwrap();
        assert!(!g.is_infinity());
        assert!(e.mul(&n, &g).is_infinity());
    }
}
