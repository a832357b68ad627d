use rug::{Integer, ops::RemRounding};

/// Kronecker symbol equal to 1. Note `(0/p) = 0`, so zero is not a
/// residue under this test.
pub fn is_quadratic_residue(a: impl Into<Integer>, p: impl Into<Integer>) -> bool {
    let a: Integer = a.into();
    let p: Integer = p.into();
    a.kronecker(&p) == 1
}

/// Square root of `a` modulo an odd prime `p` (and `p = 2`).
///
/// Returns the odd root of the pair, so callers get a canonical
/// representative; `None` when `a` is a non-residue.
pub fn mod_sqrt(a: impl Into<Integer>, p: impl Into<Integer>) -> Option<Integer> {
    let a: Integer = a.into();
    let p: Integer = p.into();
    let a = a.rem_euc(&p);
    if a == 0 {
        return Some(a);
    }
    if p == 2 {
        return Some(a);
    }
    if a.legendre(&p) != 1 {
        return None;
    }

    let mut s: Integer;
    if (&p & Integer::from(3)) == 3 {
        let e = (p.clone() + 1) >> 2;
        s = a.clone().pow_mod(&e, &p).unwrap();
    } else if (&p & Integer::from(7)) == 5 {
        // Atkin's formulas
        let e = (p.clone() - 5) >> 3;
        let a2: Integer = a.clone() * 2;
        let b = a2.clone().pow_mod(&e, &p).unwrap();
        let c = (a2 * b.clone().square()).rem_euc(&p);
        s = (&a * b * (c - 1i32)).rem_euc(&p);
    } else {
        s = tonelli_shanks(&a, &p);
    }
    if s.is_even() {
        s = &p - s;
    }
    Some(s)
}

/// [Cohen1993, Algorithm 1.5.1]. Caller guarantees `a` is a residue
/// and `p = 1 mod 8`.
fn tonelli_shanks(a: &Integer, p: &Integer) -> Integer {
    let mut q: Integer = p.clone() - 1;
    let mut r = 0u32;
    while q.is_even() {
        q >>= 1;
        r += 1;
    }

    // Smallest non-residue; for half of all integers already z = 2.
    let mut z = Integer::from(2);
    while z.kronecker(p) != -1 {
        z += 1;
    }
    let mut y = z.pow_mod(&q, p).unwrap();

    let e: Integer = (q - 1) >> 1;
    let x = a.clone().pow_mod(&e, p).unwrap();
    let mut b: Integer = (a * x.clone().square()).rem_euc(p);
    let mut x: Integer = (a * x).rem_euc(p);

    while b != 1 {
        let mut bm = b.clone();
        let mut m = 0u32;
        while bm != 1 {
            bm = bm.square().rem_euc(p);
            m += 1;
        }
        let t_exp = Integer::from(1) << (r - m - 1);
        let t = y.clone().pow_mod(&t_exp, p).unwrap();
        y = t.clone().square().rem_euc(p);
        r = m;
        x = (x * t).rem_euc(p);
        b = (b * &y).rem_euc(p);
    }
    x
}

/// Largest `r` with `r^2 * den <= num`.
pub fn floor_sqrt_ratio(num: &Integer, den: &Integer) -> Integer {
    assert!(*num >= 0 && *den > 0);
    let mut r = Integer::from(num / den).sqrt();
    while Integer::from(&r + 1).square() * den <= *num {
        r += 1;
    }
    while r.clone().square() * den > *num {
        r -= 1;
    }
    r
}

/// Smallest `r >= 0` with `r^2 * den >= num`.
pub fn ceil_sqrt_ratio(num: &Integer, den: &Integer) -> Integer {
    let mut r = floor_sqrt_ratio(num, den);
    if r.clone().square() * den < *num {
        r += 1;
    }
    r
}

/// Write `n = s * v^2` with `s` squarefree; `n > 0`. Trial division,
/// adequate for the discriminant ranges these searches visit.
pub fn squarefree_decompose(n: &Integer) -> (Integer, Integer) {
    assert!(*n > 0);
    let mut s = n.clone();
    let mut v = Integer::from(1);
    let mut f = Integer::from(2);
    loop {
        let f2 = f.clone().square();
        if f2 > s {
            break;
        }
        while s.is_divisible(&f2) {
            s /= &f2;
            v *= &f;
        }
        f += 1;
    }
    (s, v)
}

pub fn is_squarefree(n: &Integer) -> bool {
    let (_, v) = squarefree_decompose(n);
    v == 1
}

/// Discriminant of the quadratic field `Q(sqrt(d))`: the squarefree
/// part of `d`, times 4 unless it is `1 mod 4`.
pub fn fundamental_discriminant(d: &Integer) -> Integer {
    assert!(*d != 0);
    let (s, _) = squarefree_decompose(&d.clone().abs());
    let s = if *d < 0 { -s } else { s };
    if s.clone().rem_euc(Integer::from(4)) == 1 {
        s
    } else {
        s * 4
    }
}

/// Is `a` a square modulo composite `m`? Exhaustive scan; `m` stays
/// small (MNT discriminants).
pub fn is_square_mod(a: &Integer, m: u64) -> bool {
    let a = a.clone().rem_euc(Integer::from(m)).to_u64().unwrap();
    (0..m).any(|x| x * x % m == a)
}
