use rug::{Integer, ops::RemRounding};

/// Whether the embedding degree of `n` with respect to `p` divides
/// `k`, i.e. $n \mid p^k - 1$.
pub fn is_embedding_degree(p: &Integer, n: &Integer, k: u32) -> bool {
    let pk = p.clone().pow_mod(&Integer::from(k), n).unwrap();
    pk == Integer::from(1).rem_euc(n)
}

/// Whether the embedding degree is exactly `k`: $n \mid p^k - 1$ and
/// no smaller power works. Sufficient for the small `k` produced
/// here; a general version would only check divisors of `k`.
pub fn exact_embedding_degree(p: &Integer, n: &Integer, k: u32) -> bool {
    if !is_embedding_degree(p, n, k) {
        return false;
    }
    for i in 1..k {
        if is_embedding_degree(p, n, i) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bn_toy_parameters() {
        // p = 103, n = 97: ord_97(103) = 12
        let p = Integer::from(103);
        let n = Integer::from(97);
        assert!(is_embedding_degree(&p, &n, 12));
        assert!(exact_embedding_degree(&p, &n, 12));
        assert!(!exact_embedding_degree(&p, &n, 6));
        assert!(is_embedding_degree(&p, &n, 24));
        assert!(!exact_embedding_degree(&p, &n, 24));
    }

    #[test]
    fn mnt_toy_parameters() {
        // q = 577, n = 601: ord_601(577) = 6
        assert!(exact_embedding_degree(
            &Integer::from(577),
            &Integer::from(601),
            6
        ));
    }
}
