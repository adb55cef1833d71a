//! `F_{q^2}`, the base field of the curve, represented as `F_q[x]/(x^2 + x + 1)`.
//!
//! `q = 353` is pinned for this workspace (see [`crate::params::CurveParams::toy`]); the
//! modulus `x^2 + x + 1` matches the general degree-`k` irreducible `x^k + x + 1` required
//! by the field and curve context for `k = 2`.

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// The base prime `q`.
pub const Q: u64 = 353;

/// An element `c0 + c1*x` of `F_q[x]/(x^2 + x + 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseField {
    pub c0: u64,
    pub c1: u64,
}

impl BaseField {
    pub const ZERO: Self = BaseField { c0: 0, c1: 0 };
    pub const ONE: Self = BaseField { c0: 1, c1: 0 };

    #[inline]
    pub fn new(c0: u64, c1: u64) -> Self {
        BaseField {
            c0: c0 % Q,
            c1: c1 % Q,
        }
    }

    /// Construct a base-field element from an element of `F_q` (c1 = 0).
    #[inline]
    pub fn from_base(c0: u64) -> Self {
        BaseField::new(c0, 0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0 == 0 && self.c1 == 0
    }

    /// True for elements fixed by Frobenius, i.e. elements of the base field `F_q`.
    #[inline]
    pub fn is_rational(&self) -> bool {
        self.c1 == 0
    }

    /// The Frobenius endomorphism `a -> a^q`. On this representation, `x^q` is the other
    /// root of `x^2 + x + 1`, namely `-1 - x`, so `phi(c0 + c1*x) = (c0 - c1) - c1*x`.
    #[inline]
    pub fn frobenius(&self) -> Self {
        BaseField::new(
            (self.c0 + Q - self.c1 % Q) % Q,
            (Q - self.c1 % Q) % Q,
        )
    }

    /// `self^e` by square-and-multiply.
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

    /// Multiplicative inverse via the norm: `Norm(a) = a * frobenius(a) ∈ F_q`, then
    /// `a^-1 = frobenius(a) / Norm(a)`.
    pub fn inverse(&self) -> Self {
        assert!(!self.is_zero(), "inverse of zero");
        let conj = self.frobenius();
        let norm = (*self * conj).c0; // c1 is always 0 here
        let norm_inv = mod_pow(norm, Q - 2, Q);
        BaseField::new(conj.c0 * norm_inv % Q, conj.c1 * norm_inv % Q)
    }

    /// Brute-force square root. `F_{q^2}` has only `q^2` elements, small enough to search
    /// exhaustively for a toy field; production fields use Tonelli-Shanks instead.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }
        for c0 in 0..Q {
            for c1 in 0..Q {
                let candidate = BaseField::new(c0, c1);
                if candidate * candidate == *self {
                    return Some(candidate);
                }
            }
        }
        None
    }

    pub fn to_bytes(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&(self.c0 as u32).to_be_bytes());
        out[4..].copy_from_slice(&(self.c1 as u32).to_be_bytes());
        out
    }
}

fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1u64;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result
}

impl Add for BaseField {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        BaseField::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl AddAssign for BaseField {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for BaseField {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        BaseField::new(self.c0 + Q - rhs.c0, self.c1 + Q - rhs.c1)
    }
}

impl SubAssign for BaseField {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for BaseField {
    type Output = Self;
    fn neg(self) -> Self {
        BaseField::new((Q - self.c0) % Q, (Q - self.c1) % Q)
    }
}

impl Mul for BaseField {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // (a0+a1 x)(b0+b1 x) mod (x^2+x+1), using x^2 = -x-1
        let a0 = self.c0 as u128;
        let a1 = self.c1 as u128;
        let b0 = rhs.c0 as u128;
        let b1 = rhs.c1 as u128;
        let q = Q as u128;

        let c0 = a0 * b0 % q;
        let c1 = (a0 * b1 + a1 * b0) % q;
        let c2 = a1 * b1 % q;

        let rc0 = (c0 + q - c2) % q;
        let rc1 = (c1 + q - c2) % q;
        BaseField::new(rc0 as u64, rc1 as u64)
    }
}

impl MulAssign for BaseField {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for BaseField {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Distribution<BaseField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BaseField {
        BaseField::new(rng.random_range(0..Q), rng.random_range(0..Q))
    }
}
