//! A single-witness discrete-log NIZK (component E): proof that the prover knows `x`
//! such that `public = x * base`, with Fiat-Shamir binding the challenge to the
//! commitment `T` alone. Used directly by the tracer to prove knowledge of a share
//! `d_i`, and as the two-witness building block the ring proof (§4.F) generalizes.

use curve::{hash_to_scalar, Affine, Encodable, Group, RandomField, ScalarField};
use rand::Rng;
use zeroize::Zeroize;

/// `(T, z)`: commitment and response of a Schnorr proof of knowledge of a discrete log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SchnorrProof {
    pub t_point: Affine,
    pub z: ScalarField,
}

/// `Prove(x, base)`: sample `u`, commit `T = u*base`, derive `c = HashToScalar(T)`,
/// respond `z = x*c + u`. `u` is resampled on the rare chance it lands on the identity
/// (non-negligible at this workspace's toy scalar ring size), since the canonical point
/// encoder that `HashToScalar` uses refuses to hash the infinity point.
pub fn prove<R: Rng + ?Sized>(x: ScalarField, base: Affine, rng: &mut R) -> SchnorrProof {
    let mut u;
    let t_point;
    loop {
        u = ScalarField::random(rng);
        let candidate = base.scalar_mul(&u);
        if !candidate.is_identity() {
            t_point = candidate;
            break;
        }
    }
    let c = hash_to_scalar(&Encodable::Point(t_point));
    let z = x * c + u;
    u.zeroize();
    SchnorrProof { t_point, z }
}

/// `Verify(public, base, proof)`: recompute `c` from `T` and check `z*base == c*public + T`.
pub fn verify(public: Affine, base: Affine, proof: &SchnorrProof) -> bool {
    if proof.t_point.is_identity() {
        return false;
    }
    let c = hash_to_scalar(&Encodable::Point(proof.t_point));
    base.scalar_mul(&proof.z) == public.scalar_mul(&c) + proof.t_point
}

/// `BatchVerify(publics, base, proofs)`: verify many proofs against a common `base` in
/// one aggregate equation. Each proof's challenge is bound only to its own `T`, so the
/// aggregate is `sum(z_i)*base == sum(c_i*public_i) + sum(T_i)`; a single forged proof
/// cannot be masked by the others because each `c_i` is fixed independently before the
/// sums are formed.
pub fn batch_verify(publics: &[Affine], base: Affine, proofs: &[SchnorrProof]) -> bool {
    if publics.len() != proofs.len() || publics.is_empty() {
        return false;
    }
    if proofs.iter().any(|p| p.t_point.is_identity()) {
        return false;
    }

    let mut z_sum = ScalarField::ZERO;
    let mut rhs = Affine::INFINITY;
    for (public, proof) in publics.iter().zip(proofs.iter()) {
        let c = hash_to_scalar(&Encodable::Point(proof.t_point));
        z_sum += proof.z;
        rhs = rhs + public.scalar_mul(&c) + proof.t_point;
    }

    base.scalar_mul(&z_sum) == rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn prove_and_verify_roundtrip() {
        let mut rng = StdRng::seed_from_u64(3);
        let base = Affine::TEST_POINT_B;
        let x = ScalarField::from_canonical_u64(17);
        let public = base.scalar_mul(&x);
        let proof = prove(x, base, &mut rng);
        assert!(verify(public, base, &proof));
    }

    #[test]
    fn verify_rejects_wrong_public() {
        let mut rng = StdRng::seed_from_u64(4);
        let base = Affine::TEST_POINT_B;
        let x = ScalarField::from_canonical_u64(17);
        let wrong_public = base.scalar_mul(&ScalarField::from_canonical_u64(18));
        let proof = prove(x, base, &mut rng);
        assert!(!verify(wrong_public, base, &proof));
    }

    #[test]
    fn batch_verify_accepts_all_valid() {
        let mut rng = StdRng::seed_from_u64(5);
        let base = Affine::TEST_POINT_A;
        let xs: Vec<ScalarField> = (1..=4).map(ScalarField::from_canonical_u64).collect();
        let publics: Vec<Affine> = xs.iter().map(|x| base.scalar_mul(x)).collect();
        let proofs: Vec<SchnorrProof> = xs.iter().map(|x| prove(*x, base, &mut rng)).collect();
        assert!(batch_verify(&publics, base, &proofs));
    }

    #[test]
    fn batch_verify_rejects_one_bad_proof() {
        let mut rng = StdRng::seed_from_u64(6);
        let base = Affine::TEST_POINT_A;
        let xs: Vec<ScalarField> = (1..=4).map(ScalarField::from_canonical_u64).collect();
        let publics: Vec<Affine> = xs.iter().map(|x| base.scalar_mul(x)).collect();
        let mut proofs: Vec<SchnorrProof> = xs.iter().map(|x| prove(*x, base, &mut rng)).collect();
        proofs[2] = prove(ScalarField::from_canonical_u64(99), base, &mut rng);
        assert!(!batch_verify(&publics, base, &proofs));
    }
}
