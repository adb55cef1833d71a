//! Parameter and trace generation (component C): `Setup()` selects `g1`, `g2` via
//! trace-zero projection and generates the master secret `s` and system point `Q`.

use crate::errors::TarsError;
use curve::{Affine, CurveParams, Group, PowerTable, RandomField, ScalarField};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public parameters, immutable once `Setup` returns them (§3).
///
/// Invariant: `g1` is the trace of a random cofactor-cleared point (generally
/// `F_q`-rational, *not* itself in the trace-zero kernel — see DESIGN.md for why this
/// departs from the glossary's looser phrasing); `g2 = k*g - g1` lies in `ker(Trace)`.
/// `Q = s*g1`. `n*g1 = O`.
#[derive(Clone)]
pub struct PublicParams {
    pub curve: CurveParams,
    pub g1: Affine,
    pub g2: Affine,
    pub q_point: Affine,
    pub g1_table: PowerTable,
    pub g2_table: PowerTable,
    pub q_table: PowerTable,
    pub threshold: u32,
    pub num_tracers: u32,
}

/// The dealer's master secret. Destroyed (zeroized) on drop; `Setup` is the only place
/// that produces one, and it should be consumed by `issue_shares` shortly after.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterSecret(ScalarField);

impl MasterSecret {
    pub(crate) fn value(&self) -> ScalarField {
        self.0
    }
}

/// `Setup()` (§4.C): sample a random point, clear the cofactor, derive `g1 = Trace(g)`
/// and `g2 = k*g - g1`, sample the master secret, and compute `Q = s*g1`.
pub fn setup<R: Rng + ?Sized>(
    curve: CurveParams,
    threshold: u32,
    num_tracers: u32,
    rng: &mut R,
) -> Result<(PublicParams, MasterSecret), TarsError> {
    if threshold == 0 || threshold > num_tracers || curve.n < 2 {
        return Err(TarsError::InvalidParams);
    }

    let mut g = Affine::INFINITY;
    while g.is_identity() {
        let p = Affine::random(rng);
        g = p.mul_u64(curve.cofactor);
    }

    let g1 = g.trace();
    let g2 = g.mul_u64(curve.k as u64) - g1;
    if g1.is_identity() || g2.is_identity() {
        // Vanishingly unlikely for a properly chosen cofactor; treated as a parameter
        // inconsistency rather than silently retried, since it would indicate `g`
        // landed in a degenerate subgroup.
        return Err(TarsError::InvalidParams);
    }

    let s = ScalarField::random(rng);
    let g1_table = PowerTable::build_default(g1);
    let q_point = g1_table.multiply(&s);
    let g2_table = PowerTable::build_default(g2);
    let q_table = PowerTable::build_default(q_point);

    let pp = PublicParams {
        curve,
        g1,
        g2,
        q_point,
        g1_table,
        g2_table,
        q_table,
        threshold,
        num_tracers,
    };
    Ok((pp, MasterSecret(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn setup_produces_consistent_params() {
        let mut rng = StdRng::seed_from_u64(1);
        let (pp, s) = setup(CurveParams::toy(), 3, 5, &mut rng).expect("setup");

        assert!(!pp.g1.is_identity());
        assert!(!pp.g2.is_identity());
        assert!(pp.g1.is_on_curve());
        assert!(pp.g2.is_on_curve());
        assert!(pp.g1.mul_u64(pp.curve.n).is_identity());
        assert_eq!(pp.q_point, pp.g1.scalar_mul(&s.value()));
    }

    #[test]
    fn rejects_threshold_above_tracer_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(setup(CurveParams::toy(), 6, 5, &mut rng).is_err());
    }
}
