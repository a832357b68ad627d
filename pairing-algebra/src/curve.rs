use anyhow::{bail, ensure};
use rug::{Integer, ops::RemRounding};
use serde::{Deserialize, Serialize};

/// Short Weierstrass curve $y^2 = x^3 + a_4 x + a_6$ over $F_p$, p > 3.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve {
    pub p: Integer,
    pub a4: Integer,
    pub a6: Integer,
}

impl Curve {
    pub fn new(p: Integer, a4: Integer, a6: Integer) -> anyhow::Result<Curve> {
        ensure!(p > 3, "field characteristic must exceed 3, got {p}");
        let a4 = a4.rem_euc(&p);
        let a6 = a6.rem_euc(&p);
        let disc = Integer::from(4) * a4.clone().pow_mod(&Integer::from(3), &p).unwrap()
            + Integer::from(27) * a6.clone().square();
        if disc.rem_euc(&p) == 0 {
            bail!("singular curve: 4*a4^3 + 27*a6^2 = 0 mod {p}");
        }
        Ok(Curve { p, a4, a6 })
    }

    /// Curve with j-invariant `j0`, using `c` to pick a member of the
    /// twist family. [Cohen1993, Section 7.2]
    pub fn from_j_invariant(p: &Integer, j0: &Integer, c: &Integer) -> anyhow::Result<Curve> {
        let j0 = j0.clone().rem_euc(p);
        let c = c.clone().rem_euc(p);
        ensure!(c != 0, "twist scalar must be a unit");

        if j0 == 0 {
            // j = 0: y^2 = x^3 + c
            return Curve::new(p.clone(), Integer::new(), c);
        }
        if j0 == Integer::from(1728).rem_euc(p) {
            // j = 1728: y^2 = x^3 + c*x
            return Curve::new(p.clone(), c, Integer::new());
        }

        // k = j0 / (1728 - j0), a4 = 3*k*c^2, a6 = 2*k*c^3
        let denom = (Integer::from(1728) - &j0).rem_euc(p);
        let k = (j0 * denom.invert(p).unwrap()).rem_euc(p);
        let c2 = c.clone().square().rem_euc(p);
        let a4 = (Integer::from(3) * &k * &c2).rem_euc(p);
        let a6 = (Integer::from(2) * &k * c2 * &c).rem_euc(p);
        Curve::new(p.clone(), a4, a6)
    }

    pub fn j_invariant(&self) -> Integer {
        let p = &self.p;
        let a43 = Integer::from(4) * self.a4.clone().pow_mod(&Integer::from(3), p).unwrap();
        let denom = (a43.clone() + Integer::from(27) * self.a6.clone().square()).rem_euc(p);
        // new() rejects singular curves, so denom is a unit
        (Integer::from(1728) * a43 * denom.invert(p).unwrap()).rem_euc(p)
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}*x + {} over F_{}",
            self.a4, self.a6, self.p
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_singular_and_tiny() {
        assert!(Curve::new(Integer::from(3), Integer::from(1), Integer::from(1)).is_err());
        // 4*(-3)^3 + 27*2^2 = 0
        assert!(Curve::new(Integer::from(101), Integer::from(-3), Integer::from(2)).is_err());
        assert!(Curve::new(Integer::from(101), Integer::from(2), Integer::from(3)).is_ok());
    }

    #[test]
    fn j_invariant_roundtrip() {
        let p = Integer::from(101);
        for j0 in [0i32, 42, 95, 17] {
            let j0 = Integer::from(j0);
            let e = Curve::from_j_invariant(&p, &j0, &Integer::from(1)).unwrap();
            assert_eq!(e.j_invariant(), j0);
        }
        // j = 1728 mod 101 = 11
        let e = Curve::from_j_invariant(&p, &Integer::from(1728), &Integer::from(5)).unwrap();
        assert_eq!(e.j_invariant(), Integer::from(1728).rem_euc(&p));
        assert_eq!(e.a6, 0);
    }

    #[test]
    fn special_j_values() {
        let p = Integer::from(103);
        let e0 = Curve::from_j_invariant(&p, &Integer::new(), &Integer::from(7)).unwrap();
        assert_eq!((e0.a4.clone(), e0.a6.clone()), (Integer::new(), Integer::from(7)));
        assert_eq!(e0.j_invariant(), 0);
    }
}
