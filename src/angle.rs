//! Plane angles, stored in degrees.

use crate::float_types::Real;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(Real);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    /// A quarter turn, 90°
    pub const RIGHT: Angle = Angle(90.0);
    /// A half turn, 180°
    pub const STRAIGHT: Angle = Angle(180.0);

    #[inline]
    pub const fn from_degrees(degrees: Real) -> Self {
        Angle(degrees)
    }

    #[inline]
    pub fn from_radians(radians: Real) -> Self {
        Angle(radians.to_degrees())
    }

    #[inline]
    pub const fn degrees(self) -> Real {
        self.0
    }

    #[inline]
    pub fn radians(self) -> Real {
        self.0.to_radians()
    }

    /// The angle whose sine is `ratio`.
    #[inline]
    pub fn asin(ratio: Real) -> Self {
        Angle::from_radians(ratio.asin())
    }

    /// Sine and cosine, exact at integer multiples of 90° so that quarter and
    /// half turns do not leak rounding noise into transforms.
    pub fn sin_cos(self) -> (Real, Real) {
        let quarters = self.0 / 90.0;
        if quarters.is_finite() && quarters.fract() == 0.0 {
            match quarters.rem_euclid(4.0) as i64 {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            }
        } else {
            self.radians().sin_cos()
        }
    }

    #[inline]
    pub fn sin(self) -> Real {
        self.sin_cos().0
    }

    #[inline]
    pub fn cos(self) -> Real {
        self.sin_cos().1
    }

    #[inline]
    pub fn tan(self) -> Real {
        let (sin, cos) = self.sin_cos();
        sin / cos
    }

    /// 90° − self
    #[inline]
    pub fn complement(self) -> Self {
        Angle::RIGHT - self
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// True when strictly inside (0°, 90°).
    #[inline]
    pub fn is_acute(self) -> bool {
        self.0 > 0.0 && self.0 < 90.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<Real> for Angle {
    type Output = Angle;
    fn mul(self, rhs: Real) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Div<Real> for Angle {
    type Output = Angle;
    fn div(self, rhs: Real) -> Angle {
        Angle(self.0 / rhs)
    }
}
