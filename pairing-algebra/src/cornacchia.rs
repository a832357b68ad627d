use rug::Integer;

use crate::arith::mod_sqrt;

/// Primitive solution `(x, y)` of `x^2 + d*y^2 = p` for prime `p` and
/// `0 < d < p`, by Cornacchia's algorithm; `None` when no solution
/// exists.
///
/// The starting root of `-d` is reflected into `(p/2, p)`, then the
/// Euclidean remainder sequence of `(p, t)` is run until the remainder
/// drops to `sqrt(p)` or below; that remainder is the candidate `x`.
pub fn cornacchia(p: &Integer, d: &Integer) -> Option<(Integer, Integer)> {
    assert!(*d > 0 && d < p);

    let neg_d = Integer::from(-d);
    if neg_d.kronecker(p) != 1 {
        return None;
    }
    let mut t = mod_sqrt(neg_d, p.clone())?;
    if Integer::from(2 * &t) < *p {
        t = Integer::from(p - t);
    }

    let bound = p.clone().sqrt();
    let mut n = p.clone();
    loop {
        let r = n.clone() % &t;
        n = std::mem::replace(&mut t, r);
        if t <= bound {
            break;
        }
    }
    let rem = Integer::from(p - t.clone().square());
    if !rem.is_divisible(d) {
        return None;
    }
    let y2 = rem / d;
    if !y2.is_perfect_square() {
        return None;
    }
    Some((t, y2.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(p: i64, d: i64) -> Option<(Integer, Integer)> {
        cornacchia(&Integer::from(p), &Integer::from(d))
    }

    #[test]
    fn five_is_two_squared_plus_one() {
        assert_eq!(run(5, 1), Some((Integer::from(2), Integer::from(1))));
    }

    #[test]
    fn solutions_satisfy_the_form() {
        for (p, d) in [(13i64, 1i64), (29, 7), (53, 7), (61, 3), (1000003, 3)] {
            let (x, y) = run(p, d).unwrap();
            assert_eq!(x.clone().square() + Integer::from(d) * y.square(), p);
        }
    }

    #[test]
    fn non_residue_has_no_solution() {
        // -1 is a non-residue mod 7
        assert_eq!(run(7, 1), None);
    }
}
