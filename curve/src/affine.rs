//! Affine points on `E: y^2 = x^3 + a*x + b` over `F_{q^2}`, pinned to the toy curve
//! `a = 0`, `b = 1`, `q = 353` (see [`crate::params::CurveParams::toy`]).

use crate::basefield::BaseField;
use crate::group::Group;
use crate::scalarfield::ScalarField;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Affine point, or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affine {
    pub x: BaseField,
    pub y: BaseField,
    pub is_infinity: bool,
}

impl Affine {
    #[inline]
    fn curve_a() -> BaseField {
        BaseField::ZERO
    }

    #[inline]
    fn curve_b() -> BaseField {
        BaseField::ONE
    }

    pub const INFINITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    /// A fixed point of order 177 = 3*59, used as a non-trivial test fixture. Not the
    /// protocol's `g1`/`g2`/`Q` — those are sampled fresh by `Setup` per §4.C.
    pub const TEST_POINT_A: Self = Affine {
        x: BaseField { c0: 0, c1: 1 },
        y: BaseField { c0: 167, c1: 0 },
        is_infinity: false,
    };

    /// A fixed point of order 354 = q + 1, the full order of the `F_q`-rational subgroup.
    pub const TEST_POINT_B: Self = Affine {
        x: BaseField { c0: 0, c1: 3 },
        y: BaseField { c0: 104, c1: 208 },
        is_infinity: false,
    };

    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }
        let y2 = self.y * self.y;
        let x3 = self.x * self.x * self.x;
        y2 == x3 + Self::curve_a() * self.x + Self::curve_b()
    }

    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        if self.y.is_zero() {
            return Self::INFINITY;
        }
        let three_x2 = self.x * self.x * BaseField::new(3, 0);
        let lambda = (three_x2 + Self::curve_a()) / (self.y + self.y);
        let x_r = lambda * lambda - self.x - self.x;
        let y_r = lambda * (self.x - x_r) - self.y;
        Affine::new(x_r, y_r)
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, -self.y)
    }

    /// The Frobenius endomorphism `phi(x, y) = (x^q, y^q)`.
    pub fn frobenius(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x.frobenius(), self.y.frobenius())
    }

    /// `Trace(P) = P + phi(P)` for this curve's embedding degree `k = 2`.
    pub fn trace(&self) -> Self {
        *self + self.frobenius()
    }

    /// Sample a uniformly random point on the curve over the full extension field, by
    /// rejection sampling on `x` until `x^3 + a*x + b` is a square. Used by `Setup` (§4.C)
    /// to obtain a point that is generally *not* `F_q`-rational, which `g2` depends on.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        use crate::random::RandomField;
        loop {
            let x = BaseField::random(rng);
            let rhs = x * x * x + Self::curve_a() * x + Self::curve_b();
            if let Some(y) = rhs.sqrt() {
                return Affine::new(x, y);
            }
        }
    }
}

impl Group for Affine {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }
        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            return Self::INFINITY;
        }
        let lambda = (other.y - self.y) / (other.x - self.x);
        let x_r = lambda * lambda - self.x - other.x;
        let y_r = lambda * (self.x - x_r) - self.y;
        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for Affine {
    type Output = Self;
    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for Affine {
    type Output = Self;
    fn mul(self, scalar: &ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<Affine> for ScalarField {
    type Output = Affine;
    fn mul(self, point: Affine) -> Affine {
        <Affine as Group>::scalar_mul(&point, &self)
    }
}

impl Mul<&Affine> for ScalarField {
    type Output = Affine;
    fn mul(self, point: &Affine) -> Affine {
        <Affine as Group>::scalar_mul(point, &self)
    }
}
