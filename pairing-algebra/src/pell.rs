//! Solvers for the generalized Pell equation `x^2 - D*y^2 = m`,
//! following the two algorithms in the appendix of Karabina & Teske,
//! "On prime-order elliptic curves with embedding degrees k = 3, 4
//! and 6".

use rug::Integer;

use crate::arith::{ceil_sqrt_ratio, floor_sqrt_ratio};

/// Algorithm 1: `D > m^2`, `D` not a perfect square, `m != 0`.
///
/// Expands the continued fraction of `sqrt(D)` through the recurrences
/// `P_i, Q_i, a_i`, accumulating convergent numerators `G_i` and
/// denominators `B_i`, and stops at the first odd `i` with `Q_i = 1`
/// (the cycle repeats past it). A convergent with residue
/// `c = G_j^2 - D*B_j^2` yields a solution `(f*G_j, f*B_j)` exactly
/// when `m / c` is a perfect square `f^2`: scaling multiplies the
/// residue by `f^2`, so the primitive solutions of `m / f^2` are what
/// the convergents contribute.
///
/// Returns all minimal positive solutions found in the scanned range,
/// possibly none. Violated preconditions are programming errors.
pub fn pell_solve_1(D: &Integer, m: &Integer) -> Vec<(Integer, Integer)> {
    assert!(*m != 0);
    assert!(*D > m.clone().square());
    assert!(!D.is_perfect_square());

    let a0 = D.clone().sqrt();

    // Index 0 entries of P, Q, a are never read.
    let mut B = vec![Integer::from(0), Integer::from(1)];
    let mut P = vec![Integer::from(0), Integer::from(0)];
    let mut Q = vec![Integer::from(0), Integer::from(1)];
    let mut a = vec![Integer::from(0), a0.clone()];
    let mut G = vec![Integer::from(1), a0.clone()];

    let mut i = 1;
    loop {
        i += 1;
        P.push(Integer::from(&a[i - 1] * &Q[i - 1]) - &P[i - 1]);
        Q.push(Integer::from(D - P[i].clone().square()) / &Q[i - 1]);
        a.push(Integer::from(&P[i] + &a0) / &Q[i]);
        B.push(Integer::from(&a[i] * &B[i - 1]) + &B[i - 2]);
        G.push(Integer::from(&a[i] * &G[i - 1]) + &G[i - 2]);

        if Q[i] == 1 && i % 2 == 1 {
            break;
        }
    }

    let mut sols = Vec::new();
    for j in 1..i {
        let c = G[j].clone().square() - Integer::from(D * B[j].clone().square());
        if c == 0 || !m.is_divisible(&c) {
            continue;
        }
        let f2 = Integer::from(m / &c);
        if f2 > 0 && f2.is_perfect_square() {
            let f = f2.sqrt();
            sols.push((Integer::from(&f * &G[j]), f * &B[j]));
        }
    }
    sols
}

/// Algorithm 2: `D <= m^2`, `D` not a perfect square, `m != 0`.
///
/// Derives `y`-bounds from the fundamental solution `(u, v)` of
/// `x^2 - D*y^2 = 1` and scans them. Solutions `(x, y)` and `(-x, y)`
/// belong to the same associate class when `m` divides both
/// `x^2 + D*y^2` and `2*x*y`; only one representative is kept then.
pub fn pell_solve_2(D: &Integer, m: &Integer) -> Vec<(Integer, Integer)> {
    assert!(*m != 0);
    assert!(*D <= m.clone().square());
    assert!(*D > 1 && !D.is_perfect_square());

    let (u, v) = pell_solve_1(D, &Integer::from(1))
        .into_iter()
        .next()
        .expect("x^2 - D*y^2 = 1 always has a fundamental solution");

    let two_d = Integer::from(D * 2);
    let (L1, L2) = if *m > 0 {
        let hi = Integer::from(m * (u.clone() - 1));
        (Integer::from(0), floor_sqrt_ratio(&hi, &two_d))
    } else {
        let lo = Integer::from(-m);
        let hi = Integer::from(-m) * (v.clone() + 1);
        (ceil_sqrt_ratio(&lo, D), floor_sqrt_ratio(&hi, &two_d))
    };

    let mut sols = Vec::new();
    let mut y = L1;
    while y <= L2 {
        let x2 = Integer::from(m + Integer::from(D * y.clone().square()));
        if x2 >= 0 && x2.is_perfect_square() {
            let x = x2.sqrt();
            let assoc = Integer::from(-x.clone().square()) - Integer::from(D * y.clone().square());
            let cross = Integer::from(2 * &y) * &x;
            if assoc.is_divisible(m) && cross.is_divisible(m) {
                sols.push((x, y.clone()));
            } else {
                sols.push((x.clone(), y.clone()));
                sols.push((-x, y.clone()));
            }
        }
        y += 1;
    }
    sols
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(D: i64, m: i64, sols: &[(Integer, Integer)]) {
        for (x, y) in sols {
            let lhs = x.clone().square() - Integer::from(D) * y.clone().square();
            assert_eq!(lhs, m, "({x}, {y}) does not solve x^2 - {D}y^2 = {m}");
        }
    }

    #[test]
    fn minimal_solution_of_d2() {
        let sols = pell_solve_1(&Integer::from(2), &Integer::from(1));
        assert!(sols.contains(&(Integer::from(3), Integer::from(2))));
        check(2, 1, &sols);
    }

    #[test]
    fn fundamental_solution_of_d61() {
        // The classically huge fundamental solution.
        let sols = pell_solve_1(&Integer::from(61), &Integer::from(1));
        let x = Integer::from(1766319049u64);
        let y = Integer::from(226153980u64);
        assert!(sols.contains(&(x, y)));
        check(61, 1, &sols);
    }

    #[test]
    fn algorithm_1_negative_m() {
        for D in [73i64, 97, 561] {
            let sols = pell_solve_1(&Integer::from(D), &Integer::from(-8));
            check(D, -8, &sols);
        }
        // D = 561 feeds the MNT search; (71, 3) is its minimal solution.
        let sols = pell_solve_1(&Integer::from(561), &Integer::from(-8));
        assert!(sols.contains(&(Integer::from(71), Integer::from(3))));
    }

    #[test]
    fn algorithm_2_positive_m() {
        let sols = pell_solve_2(&Integer::from(2), &Integer::from(7));
        assert!(sols.contains(&(Integer::from(3), Integer::from(1))));
        check(2, 7, &sols);
    }

    #[test]
    fn algorithm_2_negative_m() {
        let sols = pell_solve_2(&Integer::from(5), &Integer::from(-4));
        assert!(sols.contains(&(Integer::from(1), Integer::from(1))));
        check(5, -4, &sols);
    }
}
