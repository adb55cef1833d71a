//! The ring proof (component F): a double Schnorr/Okamoto NIZK that the signer knows
//! `sk` for some `pid_idx` in the ring with `pid_idx = sk*g1`, and `k` with
//! `C2 = pid_idx + k*Q`, without revealing `idx`.
//!
//! Every ring position's commitments `(A_s[i], A_o[i])` are simulated except the
//! signer's own, which is computed honestly; all `l` commitments are transmitted, but
//! only `l-1` challenges are — the prover always drops the *last* ring position's
//! challenge (by list index, not by the signer's position), and the verifier always
//! recomputes and appends position `l-1`. The XOR-sum of all `l` challenges always
//! equals the aggregate Fiat-Shamir challenge `c`, regardless of which position holds
//! the derived (rather than sampled) value, so dropping a fixed position is sound no
//! matter where the real signer sits.

use crate::errors::TarsError;
use crate::params::PublicParams;
use curve::{hash_to_scalar, Affine, Encodable, Group, PowerTable, RandomField, ScalarField};
use rand::Rng;
use zeroize::Zeroize;

/// Window used for the `C2` table inside a single proof: the table is built once and
/// reused for every ring position's challenge multiply, so a wide window buys little.
const C2_TABLE_WINDOW: u32 = 2;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RingProof {
    pub a_s: Vec<Affine>,
    pub a_o: Vec<Affine>,
    /// Length `l - 1`: all challenges except the last ring position's.
    pub challenges: Vec<ScalarField>,
    pub z_s: Vec<ScalarField>,
    pub z_o: Vec<ScalarField>,
}

/// `RingProve(idx, sk, k, ring, message, C2, PP)` (§4.F).
pub fn prove<R: Rng + ?Sized>(
    pp: &PublicParams,
    idx: usize,
    sk: ScalarField,
    k: ScalarField,
    ring: &[Affine],
    c2: Affine,
    message: &[u8],
    rng: &mut R,
) -> RingProof {
    let l = ring.len();
    let c2_table = PowerTable::build(c2, C2_TABLE_WINDOW, 64);

    let mut a_s = vec![Affine::INFINITY; l];
    let mut a_o = vec![Affine::INFINITY; l];
    let mut z_s = vec![ScalarField::ZERO; l];
    let mut z_o = vec![ScalarField::ZERO; l];
    let mut full_challenges = vec![ScalarField::ZERO; l];

    let mut c = hash_to_scalar(&Encodable::Bytes(message.to_vec()));
    let mut c_xor: u64 = 0;

    for i in 0..l {
        if i == idx {
            continue;
        }
        // Resample the simulated triple whenever a commitment lands on the identity
        // (non-negligible at this workspace's toy ring size); the canonical point
        // encoder that `HashToScalar` uses refuses to hash infinity.
        let (c_i, zs_i, zo_i, a_s_i, a_o_i) = loop {
            let c_i = ScalarField::random(rng);
            let zs_i = ScalarField::random(rng);
            let zo_i = ScalarField::random(rng);
            let pid_mul_c = ring[i].scalar_mul(&c_i);
            let a_s_i = pp.g1_table.multiply(&zs_i) - pid_mul_c;
            let a_o_i = pp.q_table.multiply(&zo_i) - c2_table.multiply(&c_i) + pid_mul_c;
            if !a_s_i.is_identity() && !a_o_i.is_identity() {
                break (c_i, zs_i, zo_i, a_s_i, a_o_i);
            }
        };

        full_challenges[i] = c_i;
        z_s[i] = zs_i;
        z_o[i] = zo_i;
        a_s[i] = a_s_i;
        a_o[i] = a_o_i;

        c_xor ^= c_i.value();
        c = c * hash_to_scalar(&Encodable::Point(a_s[i])) * hash_to_scalar(&Encodable::Point(a_o[i]));
    }

    let mut u;
    loop {
        u = ScalarField::random(rng);
        let candidate_s = pp.g1_table.multiply(&u);
        let candidate_o = pp.q_table.multiply(&u);
        if !candidate_s.is_identity() && !candidate_o.is_identity() {
            a_s[idx] = candidate_s;
            a_o[idx] = candidate_o;
            break;
        }
    }
    c = c * hash_to_scalar(&Encodable::Point(a_s[idx])) * hash_to_scalar(&Encodable::Point(a_o[idx]));

    let c_idx = ScalarField::new(c.value() ^ c_xor);
    full_challenges[idx] = c_idx;
    z_s[idx] = sk * c_idx + u;
    z_o[idx] = k * c_idx + u;
    u.zeroize();

    full_challenges.truncate(l - 1);

    RingProof {
        a_s,
        a_o,
        challenges: full_challenges,
        z_s,
        z_o,
    }
}

/// `RingVerify(ring, message, C2, proof, PP)`.
pub fn verify(pp: &PublicParams, ring: &[Affine], message: &[u8], c2: Affine, proof: &RingProof) -> Result<bool, TarsError> {
    let l = ring.len();
    if proof.a_s.len() != l
        || proof.a_o.len() != l
        || proof.z_s.len() != l
        || proof.z_o.len() != l
        || proof.challenges.len() + 1 != l
    {
        return Err(TarsError::MalformedProof);
    }
    if proof.a_s.iter().any(|p| p.is_identity()) || proof.a_o.iter().any(|p| p.is_identity()) {
        // The canonical point encoder refuses infinity; an honest proof never produces
        // it, so treat it as a malformed/forged proof rather than panicking.
        return Ok(false);
    }

    let mut c = hash_to_scalar(&Encodable::Bytes(message.to_vec()));
    for i in 0..l {
        c = c * hash_to_scalar(&Encodable::Point(proof.a_s[i])) * hash_to_scalar(&Encodable::Point(proof.a_o[i]));
    }

    let mut c_xor: u64 = 0;
    for ch in &proof.challenges {
        c_xor ^= ch.value();
    }
    let last_challenge = ScalarField::new(c.value() ^ c_xor);
    let mut challenges = proof.challenges.clone();
    challenges.push(last_challenge);

    let mut z_s_sum = ScalarField::ZERO;
    let mut z_o_sum = ScalarField::ZERO;
    let mut c_sum = ScalarField::ZERO;
    let mut pid_mul_c_sum = Affine::INFINITY;
    let mut a_s_sum = Affine::INFINITY;
    let mut a_o_sum = Affine::INFINITY;
    for i in 0..l {
        z_s_sum += proof.z_s[i];
        z_o_sum += proof.z_o[i];
        c_sum += challenges[i];
        pid_mul_c_sum = pid_mul_c_sum + ring[i].scalar_mul(&challenges[i]);
        a_s_sum = a_s_sum + proof.a_s[i];
        a_o_sum = a_o_sum + proof.a_o[i];
    }

    let left_sch = pp.g1_table.multiply(&z_s_sum);
    let right_sch = pid_mul_c_sum + a_s_sum;
    let left_oka = pp.q_table.multiply(&z_o_sum);
    let right_oka = c2.scalar_mul(&c_sum) + a_o_sum - pid_mul_c_sum;

    Ok(left_sch == right_sch && left_oka == right_oka)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::setup;
    use curve::CurveParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_ring(pp: &PublicParams, rng: &mut StdRng, n: usize) -> (Vec<Affine>, Vec<ScalarField>) {
        let sks: Vec<ScalarField> = (0..n).map(|_| ScalarField::random(rng)).collect();
        let pids = sks.iter().map(|sk| pp.g1.scalar_mul(sk)).collect();
        (pids, sks)
    }

    #[test]
    fn honest_proof_verifies_for_every_signer_position() {
        let mut rng = StdRng::seed_from_u64(11);
        let (pp, _master) = setup(CurveParams::toy(), 2, 3, &mut rng).expect("setup");
        let (ring, sks) = sample_ring(&pp, &mut rng, 4);

        for idx in 0..ring.len() {
            let k = ScalarField::random(&mut rng);
            let c2 = ring[idx] + pp.q_point.scalar_mul(&k);
            let proof = prove(&pp, idx, sks[idx], k, &ring, c2, b"msg", &mut rng);
            assert_eq!(proof.challenges.len(), ring.len() - 1);
            assert!(verify(&pp, &ring, b"msg", c2, &proof).expect("verify runs"));
        }
    }

    #[test]
    fn proof_rejects_wrong_message() {
        let mut rng = StdRng::seed_from_u64(12);
        let (pp, _master) = setup(CurveParams::toy(), 2, 3, &mut rng).expect("setup");
        let (ring, sks) = sample_ring(&pp, &mut rng, 3);

        let k = ScalarField::random(&mut rng);
        let c2 = ring[1] + pp.q_point.scalar_mul(&k);
        let proof = prove(&pp, 1, sks[1], k, &ring, c2, b"msg", &mut rng);
        assert!(!verify(&pp, &ring, b"other", c2, &proof).expect("verify runs"));
    }

    #[test]
    fn proof_rejects_when_c2_does_not_encrypt_a_ring_member() {
        let mut rng = StdRng::seed_from_u64(13);
        let (pp, _master) = setup(CurveParams::toy(), 2, 3, &mut rng).expect("setup");
        let (ring, _sks) = sample_ring(&pp, &mut rng, 3);

        let k = ScalarField::random(&mut rng);
        let outsider_sk = ScalarField::random(&mut rng);
        let outsider_pid = pp.g1.scalar_mul(&outsider_sk);
        let c2 = outsider_pid + pp.q_point.scalar_mul(&k);
        let proof = prove(&pp, 0, outsider_sk, k, &ring, c2, b"msg", &mut rng);
        assert!(!verify(&pp, &ring, b"msg", c2, &proof).expect("verify runs"));
    }

    #[test]
    fn malformed_length_is_rejected_without_panicking() {
        let mut rng = StdRng::seed_from_u64(14);
        let (pp, _master) = setup(CurveParams::toy(), 2, 3, &mut rng).expect("setup");
        let (ring, sks) = sample_ring(&pp, &mut rng, 3);
        let k = ScalarField::random(&mut rng);
        let c2 = ring[0] + pp.q_point.scalar_mul(&k);
        let mut proof = prove(&pp, 0, sks[0], k, &ring, c2, b"msg", &mut rng);
        proof.a_s.pop();
        assert!(matches!(verify(&pp, &ring, b"msg", c2, &proof), Err(TarsError::MalformedProof)));
    }
}
