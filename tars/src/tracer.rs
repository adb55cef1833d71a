//! Threshold tracing (component H): each tracer computes a partial decryption of
//! `C1` under its share and proves knowledge of the share; any `t` of them combine
//! their partial decryptions via Lagrange interpolation at `0` to recover the pid.

use crate::dealer::TracerShare;
use crate::errors::TarsError;
use crate::params::PublicParams;
use crate::schnorr::{self, SchnorrProof};
use crate::signer::Ciphertext;
use curve::{Affine, Group, ScalarField};
use rand::Rng;

/// One tracer's contribution: `s_i = d_i * C1`, plus a proof of knowledge of `d_i`
/// against the tracer's published commitment `D_i = d_i * g1`.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PartialDecryption {
    pub index: u64,
    pub s_i: Affine,
    pub proof: SchnorrProof,
}

/// `PartialDecrypt(share, C1, PP)`: compute `s_i = d_i * C1` and a Schnorr proof of
/// knowledge of `d_i` relative to `g1`.
pub fn partial_decrypt<R: Rng + ?Sized>(pp: &PublicParams, share: &TracerShare, ct: &Ciphertext, rng: &mut R) -> PartialDecryption {
    let s_i = ct.c1.scalar_mul(&share.d_i);
    let proof = schnorr::prove(share.d_i, pp.g1, rng);
    PartialDecryption {
        index: share.index,
        s_i,
        proof,
    }
}

/// `Combine(shares, publicCommitments, C2, t, PP)` (§4.H): require at least `t` shares,
/// batch-verify each share's Schnorr proof against its published `D_i`, then Lagrange
/// interpolate at `0` over however many shares were presented (more than `t` is
/// accepted and still correct, since every share lies on the same degree-`(t-1)`
/// polynomial) and subtract the reconstructed point from `C2`.
///
/// The source accumulates the Lagrange numerator by *overwriting* rather than
/// multiplying across `j`, which silently drops all but the last factor and produces a
/// wrong pid whenever 3 or more shares are combined. This accumulates the full product
/// instead.
pub fn combine(
    pp: &PublicParams,
    shares: &[PartialDecryption],
    commitments: &[Affine],
    ct: &Ciphertext,
) -> Result<Affine, TarsError> {
    if shares.len() != commitments.len() {
        return Err(TarsError::MalformedProof);
    }
    if shares.len() < pp.threshold as usize {
        return Err(TarsError::TooFewShares);
    }

    let proofs: Vec<SchnorrProof> = shares.iter().map(|s| s.proof).collect();
    if !schnorr::batch_verify(commitments, pp.g1, &proofs) {
        return Err(TarsError::TraceProofInvalid);
    }

    let xs: Vec<ScalarField> = shares.iter().map(|s| ScalarField::from_canonical_u64(s.index)).collect();
    let mut s_combined = Affine::INFINITY;
    for i in 0..shares.len() {
        let mut numerator = ScalarField::ONE;
        let mut denominator = ScalarField::ONE;
        for j in 0..shares.len() {
            if i == j {
                continue;
            }
            numerator *= -xs[j];
            denominator *= xs[i] - xs[j];
        }
        let lambda = numerator / denominator;
        s_combined = s_combined + shares[i].s_i.scalar_mul(&lambda);
    }

    Ok(ct.c2 - s_combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dealer::issue_shares;
    use crate::params::setup;
    use crate::signer::sign;
    use curve::{CurveParams, RandomField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn threshold_many_shares_recover_the_signer_pid() {
        let mut rng = StdRng::seed_from_u64(31);
        let (pp, master) = setup(CurveParams::toy(), 3, 5, &mut rng).expect("setup");
        let tracer_shares = issue_shares(&pp, &master, &mut rng);
        let commitments: Vec<Affine> = tracer_shares.iter().map(|s| s.d_point).collect();

        let sk = ScalarField::random(&mut rng);
        let pid = pp.g1.scalar_mul(&sk);
        let ring = vec![pid, Affine::TEST_POINT_A, Affine::TEST_POINT_B];
        let sig = sign(&pp, sk, 0, &ring, b"msg", b"event", &mut rng).expect("sign");

        let chosen = [0usize, 2, 4];
        let partials: Vec<_> = chosen
            .iter()
            .map(|&i| partial_decrypt(&pp, &tracer_shares[i], &sig.ciphertext, &mut rng))
            .collect();
        let chosen_commitments: Vec<Affine> = chosen.iter().map(|&i| commitments[i]).collect();

        let recovered = combine(&pp, &partials, &chosen_commitments, &sig.ciphertext).expect("combine");
        assert_eq!(recovered, pid);
    }

    #[test]
    fn more_than_threshold_shares_still_recover_correctly() {
        let mut rng = StdRng::seed_from_u64(32);
        let (pp, master) = setup(CurveParams::toy(), 3, 5, &mut rng).expect("setup");
        let tracer_shares = issue_shares(&pp, &master, &mut rng);
        let commitments: Vec<Affine> = tracer_shares.iter().map(|s| s.d_point).collect();

        let sk = ScalarField::random(&mut rng);
        let pid = pp.g1.scalar_mul(&sk);
        let ring = vec![pid, Affine::TEST_POINT_A, Affine::TEST_POINT_B];
        let sig = sign(&pp, sk, 0, &ring, b"msg", b"event", &mut rng).expect("sign");

        let partials: Vec<_> = tracer_shares
            .iter()
            .map(|s| partial_decrypt(&pp, s, &sig.ciphertext, &mut rng))
            .collect();

        let recovered = combine(&pp, &partials, &commitments, &sig.ciphertext).expect("combine");
        assert_eq!(recovered, pid);
    }

    #[test]
    fn too_few_shares_is_rejected() {
        let mut rng = StdRng::seed_from_u64(33);
        let (pp, master) = setup(CurveParams::toy(), 3, 5, &mut rng).expect("setup");
        let tracer_shares = issue_shares(&pp, &master, &mut rng);
        let commitments: Vec<Affine> = tracer_shares.iter().map(|s| s.d_point).collect();

        let sk = ScalarField::random(&mut rng);
        let pid = pp.g1.scalar_mul(&sk);
        let ring = vec![pid];
        let sig = sign(&pp, sk, 0, &ring, b"msg", b"event", &mut rng).expect("sign");

        let partials: Vec<_> = tracer_shares[0..2]
            .iter()
            .map(|s| partial_decrypt(&pp, s, &sig.ciphertext, &mut rng))
            .collect();

        let err = combine(&pp, &partials, &commitments[0..2], &sig.ciphertext).unwrap_err();
        assert_eq!(err, TarsError::TooFewShares);
    }

    #[test]
    fn tampered_share_proof_is_rejected() {
        let mut rng = StdRng::seed_from_u64(34);
        let (pp, master) = setup(CurveParams::toy(), 3, 5, &mut rng).expect("setup");
        let tracer_shares = issue_shares(&pp, &master, &mut rng);
        let commitments: Vec<Affine> = tracer_shares.iter().map(|s| s.d_point).collect();

        let sk = ScalarField::random(&mut rng);
        let pid = pp.g1.scalar_mul(&sk);
        let ring = vec![pid];
        let sig = sign(&pp, sk, 0, &ring, b"msg", b"event", &mut rng).expect("sign");

        let mut partials: Vec<_> = tracer_shares[0..3]
            .iter()
            .map(|s| partial_decrypt(&pp, s, &sig.ciphertext, &mut rng))
            .collect();
        partials[1].proof = schnorr::prove(ScalarField::from_canonical_u64(3), pp.g1, &mut rng);

        let err = combine(&pp, &partials, &commitments[0..3], &sig.ciphertext).unwrap_err();
        assert_eq!(err, TarsError::TraceProofInvalid);
    }
}
