//! Right triangles solved from any two independent measurements.

use crate::angle::Angle;
use crate::errors::GeometryError;
use crate::float_types::Real;
use geo::{LineString, Polygon as GeoPolygon, coord};
use nalgebra::Point2;
use serde::Serialize;

/// A right triangle with every side and acute angle solved.
///
/// Coordinate convention:
/// - The right angle is at the origin (0, 0).
/// - `bottom_leg` lies along the positive X axis.
/// - `left_leg` lies along the positive Y axis.
/// - The hypotenuse connects (bottom_leg, 0) to (0, left_leg).
///
/// Build one from any two independent values that include at least one side
/// (two sides, or one side and one acute angle); the remaining properties are
/// solved. Values are immutable: the `with_*` operations return a new,
/// uniformly scaled triangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RightTriangle {
    bottom_leg: Real,
    left_leg: Real,
    hypotenuse: Real,
    top_angle: Angle,
    bottom_angle: Angle,
}

fn positive_length(name: &str, value: Real) -> Result<Real, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid_geometry(format!(
            "{name} must be a positive, finite number (got {value})"
        )))
    }
}

fn acute_angle(name: &str, angle: Angle) -> Result<Angle, GeometryError> {
    if !angle.is_finite() {
        return Err(GeometryError::invalid_geometry(format!("{name} must be finite")));
    }
    if !angle.is_acute() {
        return Err(GeometryError::invalid_geometry(format!(
            "{name} must be in (0°, 90°) (got {angle})"
        )));
    }
    Ok(angle)
}

fn longer_than(hypotenuse: Real, leg_name: &str, leg: Real) -> Result<(), GeometryError> {
    if hypotenuse > leg {
        Ok(())
    } else {
        Err(GeometryError::invalid_geometry(format!(
            "hypotenuse ({hypotenuse}) must be greater than {leg_name} ({leg})"
        )))
    }
}

impl RightTriangle {
    /// Final gate for every constructor: no solved side may come out
    /// zero or non-finite, even when the inputs were individually valid.
    fn solved(
        bottom_leg: Real,
        left_leg: Real,
        hypotenuse: Real,
        top_angle: Angle,
        bottom_angle: Angle,
    ) -> Result<Self, GeometryError> {
        Ok(RightTriangle {
            bottom_leg: positive_length("solved bottom_leg", bottom_leg)?,
            left_leg: positive_length("solved left_leg", left_leg)?,
            hypotenuse: positive_length("solved hypotenuse", hypotenuse)?,
            top_angle,
            bottom_angle,
        })
    }

    /// From both legs.
    pub fn from_legs(bottom_leg: Real, left_leg: Real) -> Result<Self, GeometryError> {
        let bottom_leg = positive_length("bottom_leg", bottom_leg)?;
        let left_leg = positive_length("left_leg", left_leg)?;
        let hypotenuse = bottom_leg.hypot(left_leg);

        Self::solved(
            bottom_leg,
            left_leg,
            hypotenuse,
            Angle::asin(bottom_leg / hypotenuse),
            Angle::asin(left_leg / hypotenuse),
        )
    }

    /// From the bottom leg and the hypotenuse, which must be the longer of the two.
    pub fn from_bottom_leg_and_hypotenuse(
        bottom_leg: Real,
        hypotenuse: Real,
    ) -> Result<Self, GeometryError> {
        let bottom_leg = positive_length("bottom_leg", bottom_leg)?;
        let hypotenuse = positive_length("hypotenuse", hypotenuse)?;
        longer_than(hypotenuse, "bottom_leg", bottom_leg)?;

        let top_angle = Angle::asin(bottom_leg / hypotenuse);
        Self::solved(
            bottom_leg,
            (hypotenuse * hypotenuse - bottom_leg * bottom_leg).sqrt(),
            hypotenuse,
            top_angle,
            top_angle.complement(),
        )
    }

    /// From the left leg and the hypotenuse, which must be the longer of the two.
    pub fn from_left_leg_and_hypotenuse(
        left_leg: Real,
        hypotenuse: Real,
    ) -> Result<Self, GeometryError> {
        let left_leg = positive_length("left_leg", left_leg)?;
        let hypotenuse = positive_length("hypotenuse", hypotenuse)?;
        longer_than(hypotenuse, "left_leg", left_leg)?;

        let bottom_angle = Angle::asin(left_leg / hypotenuse);
        Self::solved(
            (hypotenuse * hypotenuse - left_leg * left_leg).sqrt(),
            left_leg,
            hypotenuse,
            bottom_angle.complement(),
            bottom_angle,
        )
    }

    /// From the bottom leg and the angle opposite to it.
    pub fn from_bottom_leg_and_top_angle(
        bottom_leg: Real,
        top_angle: Angle,
    ) -> Result<Self, GeometryError> {
        let bottom_leg = positive_length("bottom_leg", bottom_leg)?;
        let top_angle = acute_angle("top_angle", top_angle)?;
        let hypotenuse = bottom_leg / top_angle.sin();

        Self::solved(
            bottom_leg,
            // clamped: rounding can push the difference a hair below zero
            (hypotenuse * hypotenuse - bottom_leg * bottom_leg).max(0.0).sqrt(),
            hypotenuse,
            top_angle,
            top_angle.complement(),
        )
    }

    /// From the bottom leg and the angle adjacent to it.
    pub fn from_bottom_leg_and_bottom_angle(
        bottom_leg: Real,
        bottom_angle: Angle,
    ) -> Result<Self, GeometryError> {
        let bottom_angle = acute_angle("bottom_angle", bottom_angle)?;
        Self::from_bottom_leg_and_top_angle(bottom_leg, bottom_angle.complement())
    }

    /// From the left leg and the angle adjacent to it.
    pub fn from_left_leg_and_top_angle(
        left_leg: Real,
        top_angle: Angle,
    ) -> Result<Self, GeometryError> {
        let top_angle = acute_angle("top_angle", top_angle)?;
        Self::from_left_leg_and_bottom_angle(left_leg, top_angle.complement())
    }

    /// From the left leg and the angle opposite to it.
    pub fn from_left_leg_and_bottom_angle(
        left_leg: Real,
        bottom_angle: Angle,
    ) -> Result<Self, GeometryError> {
        let left_leg = positive_length("left_leg", left_leg)?;
        let bottom_angle = acute_angle("bottom_angle", bottom_angle)?;
        let hypotenuse = left_leg / bottom_angle.sin();

        Self::solved(
            (hypotenuse * hypotenuse - left_leg * left_leg).max(0.0).sqrt(),
            left_leg,
            hypotenuse,
            bottom_angle.complement(),
            bottom_angle,
        )
    }

    /// From the hypotenuse and the top angle.
    pub fn from_hypotenuse_and_top_angle(
        hypotenuse: Real,
        top_angle: Angle,
    ) -> Result<Self, GeometryError> {
        let hypotenuse = positive_length("hypotenuse", hypotenuse)?;
        let top_angle = acute_angle("top_angle", top_angle)?;
        let (sin, cos) = top_angle.sin_cos();

        Self::solved(
            hypotenuse * sin,
            hypotenuse * cos,
            hypotenuse,
            top_angle,
            top_angle.complement(),
        )
    }

    /// From the hypotenuse and the bottom angle.
    pub fn from_hypotenuse_and_bottom_angle(
        hypotenuse: Real,
        bottom_angle: Angle,
    ) -> Result<Self, GeometryError> {
        let hypotenuse = positive_length("hypotenuse", hypotenuse)?;
        let bottom_angle = acute_angle("bottom_angle", bottom_angle)?;
        let (sin, cos) = bottom_angle.sin_cos();

        Self::solved(
            hypotenuse * cos,
            hypotenuse * sin,
            hypotenuse,
            bottom_angle.complement(),
            bottom_angle,
        )
    }

    /// The leg along the positive X axis.
    #[inline]
    pub const fn bottom_leg(&self) -> Real {
        self.bottom_leg
    }

    /// The leg along the positive Y axis.
    #[inline]
    pub const fn left_leg(&self) -> Real {
        self.left_leg
    }

    /// The side opposite the right angle.
    #[inline]
    pub const fn hypotenuse(&self) -> Real {
        self.hypotenuse
    }

    /// The acute angle at the top-left vertex, opposite `bottom_leg`.
    #[inline]
    pub const fn top_angle(&self) -> Angle {
        self.top_angle
    }

    /// The acute angle at the bottom-right vertex, opposite `left_leg`.
    #[inline]
    pub const fn bottom_angle(&self) -> Angle {
        self.bottom_angle
    }

    /// ½ × `bottom_leg` × `left_leg`
    pub fn area(&self) -> Real {
        0.5 * self.bottom_leg * self.left_leg
    }

    pub fn perimeter(&self) -> Real {
        self.bottom_leg + self.left_leg + self.hypotenuse
    }

    /// Radius of the inscribed circle: (`bottom_leg` + `left_leg` − `hypotenuse`) / 2.
    pub fn inradius(&self) -> Real {
        (self.bottom_leg + self.left_leg - self.hypotenuse) / 2.0
    }

    /// Radius of the circumscribed circle: `hypotenuse` / 2.
    pub fn circumradius(&self) -> Real {
        self.hypotenuse / 2.0
    }

    /// Returns a new triangle with `bottom_leg` set to `new_bottom_leg`,
    /// scaling the other sides so that both acute angles are unchanged.
    pub fn with_bottom_leg(&self, new_bottom_leg: Real) -> Result<Self, GeometryError> {
        let new_bottom_leg = positive_length("new_bottom_leg", new_bottom_leg)?;
        let scale = new_bottom_leg / self.bottom_leg;
        Self::solved(
            new_bottom_leg,
            self.left_leg * scale,
            self.hypotenuse * scale,
            self.top_angle,
            self.bottom_angle,
        )
    }

    /// Returns a new triangle with `left_leg` set to `new_left_leg`,
    /// scaling the other sides so that both acute angles are unchanged.
    pub fn with_left_leg(&self, new_left_leg: Real) -> Result<Self, GeometryError> {
        let new_left_leg = positive_length("new_left_leg", new_left_leg)?;
        let scale = new_left_leg / self.left_leg;
        Self::solved(
            self.bottom_leg * scale,
            new_left_leg,
            self.hypotenuse * scale,
            self.top_angle,
            self.bottom_angle,
        )
    }

    /// Returns a new triangle with `hypotenuse` set to `new_hypotenuse`,
    /// scaling both legs so that both acute angles are unchanged.
    pub fn with_hypotenuse(&self, new_hypotenuse: Real) -> Result<Self, GeometryError> {
        let new_hypotenuse = positive_length("new_hypotenuse", new_hypotenuse)?;
        let scale = new_hypotenuse / self.hypotenuse;
        Self::solved(
            self.bottom_leg * scale,
            self.left_leg * scale,
            new_hypotenuse,
            self.top_angle,
            self.bottom_angle,
        )
    }

    /// The right-angle corner, the bottom-right corner and the top-left corner.
    pub fn vertices(&self) -> [Point2<Real>; 3] {
        [
            Point2::origin(),
            Point2::new(self.bottom_leg, 0.0),
            Point2::new(0.0, self.left_leg),
        ]
    }

    /// The triangle as a closed planar polygon in the XY plane.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        let line_string = LineString::new(vec![
            coord! {x: 0.0, y: 0.0},
            coord! {x: self.bottom_leg, y: 0.0},
            coord! {x: 0.0, y: self.left_leg},
        ]);
        GeoPolygon::new(line_string, vec![])
    }
}
