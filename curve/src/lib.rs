//! # Toy Supersingular Curve over `F_{q^2}`
//!
//! Field and curve context for TARS: extension-field arithmetic, the curve group,
//! Frobenius-based trace, a Weil pairing kept for extensibility, fixed-base power
//! tables, and `HashToScalar`.
//!
//! ## Curve Specification
//!
//! - **Equation**: `y^2 = x^3 + 1` (`a = 0`, `b = 1`)
//! - **Base field**: `F_q`, `q = 353`
//! - **Extension**: `F_{q^2} = F_q[x]/(x^2 + x + 1)`, degree `k = 2`
//! - **Scalar ring**: `Z_n`, `n = 59` (prime)
//! - **Cofactor**: `h = 36` (`#E(F_{q^2}) = h * n^2`)
//!
//! These are toy parameters (see [`params::CurveParams::toy`]): small enough that every
//! invariant needed by the ring-signature protocol can be checked by brute force, unlike
//! a production-size pairing-friendly curve.
//!
//! ## Quick Start
//!
//! ```rust
//! use curve::{Affine, ScalarField, Group, RandomField};
//!
//! let mut rng = rand::rng();
//! let scalar = ScalarField::random(&mut rng);
//! let point = Affine::TEST_POINT_A.scalar_mul(&scalar);
//! assert!(point.is_on_curve());
//! ```

mod affine;
mod basefield;
mod error;
mod group;
mod hash;
mod pairing;
mod params;
mod powertable;
mod random;
mod scalarfield;

pub use affine::Affine;
pub use basefield::BaseField;
pub use error::CurveError;
pub use group::{Group, ScalarBits};
pub use hash::{hash_to_scalar, Encodable};
pub use pairing::weil_pairing;
pub use params::CurveParams;
pub use powertable::PowerTable;
pub use random::RandomField;
pub use scalarfield::ScalarField;
