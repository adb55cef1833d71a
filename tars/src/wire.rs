//! Binary encoding of persisted protocol state (§6, §10.D). The source's own artifacts
//! are JSON; this workspace targets the same field names and logical structure but
//! encodes them with `bincode`, the binary serializer already in this crate's
//! dependency table.

use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug)]
pub struct WireError(bincode::Error);

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wire (de)serialization failed: {}", self.0)
    }
}

impl std::error::Error for WireError {}

pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, WireError> {
    bincode::serialize(value).map_err(WireError)
}

pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, WireError> {
    bincode::deserialize(bytes).map_err(WireError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::setup;
    use crate::signer::sign;
    use crate::user::user_keygen;
    use curve::{Affine, CurveParams};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn signature_round_trips_through_wire_bytes() {
        let mut rng = StdRng::seed_from_u64(51);
        let (pp, _master) = setup(CurveParams::toy(), 2, 3, &mut rng).expect("setup");
        let user = user_keygen(&pp, &mut rng);
        let ring = vec![user.pid, Affine::TEST_POINT_A];
        let sig = sign(&pp, user.sk, 0, &ring, b"msg", b"ev", &mut rng).expect("sign");

        let bytes = to_bytes(&sig).expect("encode");
        let decoded: crate::signer::Signature = from_bytes(&bytes).expect("decode");
        assert_eq!(decoded.ciphertext, sig.ciphertext);
    }
}
