//! The transform chain from leg-local coordinates to the frame.
//!
//! Leg-local geometry is authored with X running down the leg from the apex and
//! Z pointing out of the outer edge. The apex transform tilts that frame onto
//! the right leg and lifts it to the apex; the left leg is reached either by a
//! half turn about Z (parts that must keep their handedness, such as threaded
//! platforms) or by mirroring across the X symmetry plane.

use super::{SymmetryPlane, Transform2D, Transform3D};
use crate::angle::Angle;
use crate::config::Configuration;
use crate::derived;
use crate::errors::GeometryError;
use crate::float_types::Real;

/// How far a platform is pulled in from the outer edge of the leg.
const PLATFORM_EDGE_INSET: Real = 0.5;
/// Sinks the platform into the body so their faces are never coplanar.
const PLATFORM_SURFACE_NUDGE: Real = 0.001;

/// Rotates leg-local X onto the outer edge of the right leg and lifts the
/// origin to the apex.
pub fn apex_transform(config: &Configuration) -> Result<Transform3D, GeometryError> {
    config.validate()?;
    Ok(Transform3D::rotation_y(config.bottom_angle()).translated(0.0, 0.0, config.apex_elevation()))
}

/// [`apex_transform`] for cross sections drawn in the XY plane, where Y is up.
pub fn apex_transform_2d(config: &Configuration) -> Result<Transform2D, GeometryError> {
    config.validate()?;
    Ok(Transform2D::rotation(-config.bottom_angle()).translated(0.0, config.apex_elevation()))
}

/// A point `position` along the outer edge of the right leg, measured from the apex.
pub fn leg_transform(config: &Configuration, position: Real) -> Result<Transform3D, GeometryError> {
    Ok(Transform3D::translation(position, 0.0, 0.0).concatenated(&apex_transform(config)?))
}

/// Local offset → leg-axis translation → apex. The local rotation cancels the
/// leg tilt so the platform ends up level.
pub(crate) fn platform_transform_at(
    config: &Configuration,
    position: Real,
    apex: &Transform3D,
) -> Transform3D {
    Transform3D::translation(
        config.platform_width / 2.0 - PLATFORM_EDGE_INSET,
        0.0,
        -PLATFORM_SURFACE_NUDGE,
    )
    .rotated_y(-config.bottom_angle())
    .translated(position, 0.0, 0.0)
    .concatenated(apex)
}

/// Placement of platform `index` on the right leg, counted from the apex.
pub fn platform_transform(config: &Configuration, index: usize) -> Result<Transform3D, GeometryError> {
    let positions = derived::platform_positions(config)?;
    let position = positions
        .get(index)
        .copied()
        .ok_or(GeometryError::PlatformIndexOutOfRange {
            index,
            count: config.candles_per_leg,
        })?;
    Ok(platform_transform_at(config, position, &apex_transform(config)?))
}

pub fn top_platform_transform(config: &Configuration) -> Result<Transform3D, GeometryError> {
    config.validate()?;
    Ok(Transform3D::translation(0.0, 0.0, config.height_without_feet()))
}

/// The back-to-back counterpart of a right-leg placement on the left leg.
pub fn opposite_leg(transform: &Transform3D) -> Transform3D {
    transform.rotated_z(Angle::STRAIGHT)
}

/// The mirror image of a right-leg placement on the left leg.
pub fn mirrored_leg(transform: &Transform3D) -> Transform3D {
    transform.mirrored(SymmetryPlane::X)
}
