#![allow(nonstandard_style)]

use rug::Integer;
use serde::Serialize;

use pairing_algebra::curve::Curve;
use pairing_algebra::point::Point;

pub mod bn;
pub mod cm;
pub mod cocks_pinch;
pub mod mnt6;

/// One finished parameter set: a curve over $F_p$, a base point of
/// prime order `n`, and the cofactor `r` with $\#E = r \cdot n$.
#[derive(Clone, Debug, Serialize)]
pub struct CurveParams {
    pub curve: Curve,
    pub n: Integer,
    pub r: Integer,
    pub generator: Point,
    /// Embedding degree, where the construction guarantees one.
    pub k: Option<u32>,
    /// CM discriminant, where the construction fixes one.
    pub disc: Option<Integer>,
}

impl std::fmt::Display for CurveParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.curve)?;
        writeln!(f, "order: {} * {}", self.r, self.n)?;
        write!(f, "generator: {}", self.generator)?;
        if let Some(k) = self.k {
            write!(f, "\nembedding degree: {k}")?;
        }
        if let Some(d) = &self.disc {
            write!(f, "\ndiscriminant: {d}")?;
        }
        Ok(())
    }
}
