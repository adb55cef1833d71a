//! Signing and verification (component G): encrypt the signer's `pid` under the
//! threshold public key, bind the event to a linkability tag `T`, and attach a ring
//! proof that the ciphertext really encrypts a ring member's identity.

use crate::errors::TarsError;
use crate::params::PublicParams;
use crate::ring::{self, RingProof};
use curve::{Affine, Group, RandomField, ScalarField};
use rand::Rng;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// The encrypted, linkable part of a signature: `C1 = k*g1`, `C2 = pid + k*Q`,
/// `T = H(event)*g1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ciphertext {
    pub c1: Affine,
    pub c2: Affine,
    pub t: Affine,
}

/// A complete ring signature: the ciphertext plus the ring proof binding it to the
/// declared ring and message.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Signature {
    pub ciphertext: Ciphertext,
    pub proof: RingProof,
}

/// `H_event(ev)`: SHA-256 of the event bytes, interpreted as a big-endian integer. It is
/// reduced mod `n` only when used as a curve scalar; since `g1` has order exactly `n`,
/// `H_event * g1` is unaffected by that reduction and matches the unreduced-integer
/// definition bit-for-bit in its final point.
fn hash_event(event: &[u8]) -> ScalarField {
    let mut hasher = Sha256::new();
    hasher.update(event);
    let digest = hasher.finalize();
    ScalarField::from_be_bytes_mod_n(&digest)
}

/// `Sign(sk, idx, ring, message, event, PP)` (§4.G). `idx` is the signer's zero-based
/// position in `ring`; `ring[idx]` must equal `sk*g1`.
pub fn sign<R: Rng + ?Sized>(
    pp: &PublicParams,
    sk: ScalarField,
    idx: usize,
    ring: &[Affine],
    message: &[u8],
    event: &[u8],
    rng: &mut R,
) -> Result<Signature, TarsError> {
    if idx >= ring.len() || ring[idx] != pp.g1_table.multiply(&sk) {
        return Err(TarsError::SignerNotInRing);
    }

    let mut k = ScalarField::random(rng);
    let c1 = pp.g1_table.multiply(&k);
    let c2 = ring[idx] + pp.q_table.multiply(&k);
    let h_event = hash_event(event);
    let t = pp.g1_table.multiply(&h_event);

    let proof = ring::prove(pp, idx, sk, k, ring, c2, message, rng);
    k.zeroize();

    Ok(Signature {
        ciphertext: Ciphertext { c1, c2, t },
        proof,
    })
}

/// `Verify(ring, message, event, sig, PP)`. Checks the linkability tag against the
/// declared event, then delegates identity-membership checking to the ring proof.
pub fn verify(pp: &PublicParams, ring: &[Affine], message: &[u8], event: &[u8], sig: &Signature) -> bool {
    let h_event = hash_event(event);
    if sig.ciphertext.t != pp.g1_table.multiply(&h_event) {
        return false;
    }
    ring::verify(pp, ring, message, sig.ciphertext.c2, &sig.proof).unwrap_or(false)
}

/// `Link(sig_a, sig_b)`: two valid signatures on the same event (and hence the same
/// `T`) were produced by the same signer, regardless of message or ring.
pub fn link(sig_a: &Signature, sig_b: &Signature) -> bool {
    sig_a.ciphertext.t == sig_b.ciphertext.t
}
