//! # TARS: a Traceable Anonymous Ring Signature
//!
//! Protocol flow, built on the sibling [`curve`] crate:
//!
//! 1. [`params::setup`] (component C) samples public parameters and a master secret.
//! 2. [`dealer::issue_shares`] (component D) splits the master secret into `m` Shamir
//!    shares, any `t` of which can later reconstruct a trace.
//! 3. [`user::user_keygen`] gives each ring member a signing key `sk`, a verification
//!    key `pk`, and a pseudonymous identity `pid` only the tracers can open.
//! 4. [`signer::sign`] (component G) encrypts the signer's `pid` under the threshold
//!    public key and attaches a [`ring::RingProof`] (component F, built from the
//!    [`schnorr`] single-witness NIZK of component E) proving the ciphertext opens to
//!    some ring member without revealing which one.
//! 5. [`signer::verify`] checks the proof and the event-bound linkability tag `T`;
//!    [`signer::link`] compares two signatures' tags to decide if they share a signer,
//!    with no secret material involved.
//! 6. [`tracer::partial_decrypt`] and [`tracer::combine`] (component H) let any `t`
//!    tracers jointly recover the signer's `pid` from a signature, without any single
//!    tracer (or fewer than `t` of them) learning anything.
//!
//! There is no runtime logging in this crate: every fallible operation returns a typed
//! [`errors::TarsError`], and `verify`/`link` are total functions returning `bool`, so
//! the call sequence above is the complete audit trail a caller needs.

pub mod dealer;
pub mod errors;
pub mod params;
pub mod ring;
pub mod schnorr;
pub mod signer;
pub mod tracer;
pub mod user;
pub mod wire;

pub use dealer::{issue_shares, TracerShare};
pub use errors::TarsError;
pub use params::{setup, MasterSecret, PublicParams};
pub use ring::RingProof;
pub use schnorr::SchnorrProof;
pub use signer::{link, sign, verify, Ciphertext, Signature};
pub use tracer::{combine, partial_decrypt, PartialDecryption};
pub use user::{user_keygen, UserIdentity};
