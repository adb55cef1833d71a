//! Error kinds for the TARS protocol layer (§7). Verification is total and returns
//! `bool` per policy; only `setup`, `issue_shares`, `sign`, `partial_decrypt`, and
//! `combine` are fallible and report one of these.

use curve::CurveError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TarsError {
    #[error("inconsistent curve or protocol parameters")]
    InvalidParams,
    #[error("signer's pid is not a member of the declared ring")]
    SignerNotInRing,
    #[error("malformed proof: length mismatch between ring and proof vectors")]
    MalformedProof,
    #[error("a tracer's Schnorr proof failed batch verification")]
    TraceProofInvalid,
    #[error("fewer than the threshold number of shares were presented")]
    TooFewShares,
    #[error(transparent)]
    Curve(#[from] CurveError),
}
