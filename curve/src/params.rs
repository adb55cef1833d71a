use serde::{Deserialize, Serialize};

/// Curve/field constants, matching the persisted layout's `{q, a, b, n, r, k}` (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Base prime field modulus.
    pub q: u64,
    /// Curve coefficient `a` in `y^2 = x^3 + a*x + b`.
    pub a: u64,
    /// Curve coefficient `b`.
    pub b: u64,
    /// Scalar ring order (prime).
    pub n: u64,
    /// Pairing order (equal to `n` on this curve).
    pub r: u64,
    /// Embedding degree / extension degree of the base field.
    pub k: u32,
    /// `#E(F_{q^k}) / n^2`, the cofactor cleared during `Setup`.
    pub cofactor: u64,
}

impl CurveParams {
    /// The pinned toy parameter set this workspace is built and tested against: a
    /// supersingular curve `y^2 = x^3 + 1` over `F_{353^2}`, embedding degree `k = 2`,
    /// scalar ring order `n = 59`. Chosen so every invariant in the testable-properties
    /// list is checkable by brute force in-process.
    pub fn toy() -> Self {
        CurveParams {
            q: 353,
            a: 0,
            b: 1,
            n: 59,
            r: 59,
            k: 2,
            cofactor: 36,
        }
    }
}
