//! Canonical encoding and `HashToScalar` (component A).
//!
//! The source dispatches on the runtime type of its hash input (tuple, point, bytes, or
//! "other", stringified). Per the design notes this is closed into a fixed enum here so
//! the byte layout is checked at compile time instead of at runtime.

use crate::affine::Affine;
use crate::scalarfield::ScalarField;
use sha2::{Digest, Sha224};

/// The closed set of values `HashToScalar` can consume.
pub enum Encodable {
    /// A finite curve point; encoded as its x then y polynomial coefficients, each a
    /// 32-byte big-endian integer. The infinity point must never be passed here.
    Point(Affine),
    /// A raw byte string, encoded as-is.
    Bytes(Vec<u8>),
    /// An ordered sequence of encodables, concatenated in order.
    Tuple(Vec<Encodable>),
    /// A value with no canonical binary form; hashed via its canonical decimal string.
    Decimal(String),
}

impl Encodable {
    /// The exact byte layout fed to SHA-224, per §4.A.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        match self {
            Encodable::Point(p) => {
                assert!(!p.is_infinity(), "infinity must never be hashed");
                let mut out = Vec::with_capacity(128);
                out.extend_from_slice(&coeff_be32(p.x.c0));
                out.extend_from_slice(&coeff_be32(p.x.c1));
                out.extend_from_slice(&coeff_be32(p.y.c0));
                out.extend_from_slice(&coeff_be32(p.y.c1));
                out
            }
            Encodable::Bytes(b) => b.clone(),
            Encodable::Tuple(items) => {
                let mut out = Vec::new();
                for item in items {
                    out.extend_from_slice(&item.canonical_bytes());
                }
                out
            }
            Encodable::Decimal(s) => s.as_bytes().to_vec(),
        }
    }
}

fn coeff_be32(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}

/// `HashToScalar(x)`: SHA-224 of the canonical encoding of `x`, reduced mod `n`.
pub fn hash_to_scalar(input: &Encodable) -> ScalarField {
    let mut hasher = Sha224::new();
    hasher.update(input.canonical_bytes());
    let digest = hasher.finalize();
    ScalarField::from_be_bytes_mod_n(&digest)
}
