use pairing_algebra::arith::{is_quadratic_residue, mod_sqrt};
use pairing_algebra::cornacchia::cornacchia;
use rug::{Integer, ops::RemRounding};

const PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

#[test]
fn quadratic_residue_agrees_with_brute_force() {
    for &p in PRIMES {
        let squares: std::collections::HashSet<u32> = (1..p).map(|y| y * y % p).collect();
        for a in 1..p {
            assert_eq!(
                is_quadratic_residue(a, p),
                squares.contains(&a),
                "disagreement at a = {a}, p = {p}"
            );
        }
    }
}

#[test]
fn mod_sqrt_roundtrip_all_residues() {
    // 3 mod 4, 5 mod 8 and 1 mod 8 branches are all exercised here
    for &p in PRIMES {
        let p = Integer::from(p);
        for a in 1..p.to_u32().unwrap() {
            match mod_sqrt(a, p.clone()) {
                Some(s) => {
                    assert!(s.is_odd());
                    assert_eq!(s.square().rem_euc(&p), a);
                }
                None => assert!(!is_quadratic_residue(a, p.clone())),
            }
        }
    }
}

#[test]
fn mod_sqrt_large_prime() {
    let p = Integer::from(1000000007u64); // 3 mod 4
    let a = Integer::from(1234567u64);
    let s = mod_sqrt(a.clone(), p.clone()).unwrap();
    assert_eq!(s.clone().square().rem_euc(&p), a);
    assert!(s.is_odd());
}

#[test]
fn cornacchia_represents_every_split_prime() {
    // p = x^2 + y^2 whenever p = 1 mod 4, and p = x^2 + 3y^2
    // whenever p = 1 mod 3
    for &p in PRIMES {
        if p % 4 == 1 {
            let (x, y) = cornacchia(&Integer::from(p), &Integer::from(1)).unwrap();
            assert_eq!(x.square() + y.square(), p);
        }
        if p % 3 == 1 {
            let (x, y) = cornacchia(&Integer::from(p), &Integer::from(3)).unwrap();
            assert_eq!(x.square() + Integer::from(3) * y.square(), p);
        }
    }
}
