//! The scalar ring `Z_n`, `n = 59` for the pinned toy curve (see
//! [`crate::params::CurveParams::toy`]).
//!
//! `n` is small enough on this curve that Montgomery form buys nothing; arithmetic is
//! plain `u64` modular arithmetic, the way the sibling curve crate's scalar field would
//! degenerate to for a modulus this size.

use crate::group::ScalarBits;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use zeroize::Zeroize;

/// The scalar ring's modulus.
pub const N: u64 = 59;

/// An element of `Z_n`.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
pub struct ScalarField {
    value: u64,
}

impl ScalarField {
    pub const ZERO: Self = ScalarField { value: 0 };
    pub const ONE: Self = ScalarField { value: 1 };

    #[inline]
    pub fn new(value: u64) -> Self {
        ScalarField { value: value % N }
    }

    #[inline]
    pub fn from_canonical_u64(value: u64) -> Self {
        Self::new(value)
    }

    /// Reduce a big-endian unsigned integer (e.g. a hash digest) mod `n`, without assuming
    /// it already fits in a `u64`.
    pub fn from_be_bytes_mod_n(bytes: &[u8]) -> Self {
        let mut acc: u64 = 0;
        for &b in bytes {
            acc = (acc * 256 + b as u64) % N;
        }
        ScalarField { value: acc }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// `self^e mod n` by square-and-multiply.
    pub fn pow(&self, mut e: u64) -> Self {
        let mut base = *self;
        let mut result = Self::ONE;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem (`n` is prime).
    pub fn inverse(&self) -> Self {
        assert!(!self.is_zero(), "inverse of zero");
        self.pow(N - 2)
    }
}

impl ScalarBits for ScalarField {
    fn to_u64_limbs(&self) -> [u64; 4] {
        [self.value, 0, 0, 0]
    }
}

impl fmt::Debug for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self.value)
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add for ScalarField {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        ScalarField::new(self.value + rhs.value)
    }
}

impl AddAssign for ScalarField {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ScalarField {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        ScalarField::new(self.value + N - rhs.value)
    }
}

impl SubAssign for ScalarField {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for ScalarField {
    type Output = Self;
    fn neg(self) -> Self {
        ScalarField::new((N - self.value) % N)
    }
}

impl Mul for ScalarField {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        ScalarField::new(self.value * rhs.value)
    }
}

impl MulAssign for ScalarField {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for ScalarField {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        ScalarField::new(rng.random_range(0..N))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_one() {
        assert!(ScalarField::ZERO.is_zero());
        assert_eq!(ScalarField::ONE.value(), 1);
    }

    #[test]
    fn add_wraps_mod_n() {
        let a = ScalarField::new(N - 1);
        let b = ScalarField::new(2);
        assert_eq!((a + b).value(), 1);
    }

    #[test]
    fn sub_and_neg() {
        let a = ScalarField::new(5);
        let b = ScalarField::new(12);
        assert_eq!(a - b, a + (-b));
    }

    #[test]
    fn mul_inverse_roundtrip() {
        for v in 1..N {
            let a = ScalarField::new(v);
            assert_eq!(a * a.inverse(), ScalarField::ONE);
        }
    }

    #[test]
    fn from_be_bytes_mod_n_matches_u64_reduction() {
        let bytes = 123456789u64.to_be_bytes();
        let a = ScalarField::from_be_bytes_mod_n(&bytes);
        let b = ScalarField::from_canonical_u64(123456789 % N);
        assert_eq!(a, b);
    }
}
