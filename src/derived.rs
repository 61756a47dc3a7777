//! Secondary measurements derived from a [`Configuration`].
//!
//! The frame is modelled as two mirrored right triangles sharing the apex. Each
//! function here is pure: it validates the configuration, derives its value
//! and stores nothing, so the results can never go stale.

use crate::config::Configuration;
use crate::distribute::LinearDistribution;
use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::triangle::RightTriangle;
use nalgebra::Vector3;
use serde::Serialize;
use tracing::{debug, instrument};

/// Clearance between the socket mount thread and the cable hole through a platform.
const PLATFORM_HOLE_CLEARANCE: Real = 1.0;
/// Distance from the open end of the inner leg to the bottom panel screw.
const BOTTOM_PANEL_SCREW_INSET: Real = 9.0;

/// One half of the outer outline: the vertical from the apex down to the floor,
/// the floor out to the foot of the leg, and the outer edge of the leg.
pub fn outer_triangle_half(config: &Configuration) -> Result<RightTriangle, GeometryError> {
    config.validate()?;
    RightTriangle::from_left_leg_and_top_angle(config.apex_elevation(), config.half_leg_angle())
}

/// Length of the outer edge of a leg, apex to floor.
pub fn leg_length(config: &Configuration) -> Result<Real, GeometryError> {
    Ok(outer_triangle_half(config)?.hypotenuse())
}

/// Horizontal distance from the symmetry plane to the outer foot of a leg.
pub fn half_triangle_width(config: &Configuration) -> Result<Real, GeometryError> {
    Ok(outer_triangle_half(config)?.bottom_leg())
}

/// Width of the footprint a leg of `thickness` leaves on the floor.
pub fn leg_base_width(config: &Configuration) -> Result<Real, GeometryError> {
    config.validate()?;
    Ok(RightTriangle::from_left_leg_and_bottom_angle(config.thickness, config.bottom_angle())?
        .hypotenuse())
}

/// Vertical extent of the body thickness at the apex.
pub fn z_thickness(config: &Configuration) -> Result<Real, GeometryError> {
    config.validate()?;
    Ok(RightTriangle::from_left_leg_and_bottom_angle(config.thickness, config.half_leg_angle())?
        .hypotenuse())
}

/// Length of the inner edge of a leg, from where the two inner edges meet down to the floor.
pub fn inner_leg_length(config: &Configuration) -> Result<Real, GeometryError> {
    let length = (config.apex_elevation() - z_thickness(config)?) / config.bottom_angle().sin();
    if length.is_finite() && length > tolerance() {
        Ok(length)
    } else {
        Err(GeometryError::invalid_geometry(format!(
            "body thickness {} leaves no inner leg (inner leg length {length})",
            config.thickness
        )))
    }
}

/// Offset along the leg axis from the apex to where the inner leg starts.
pub fn inner_leg_start(config: &Configuration) -> Result<Real, GeometryError> {
    config.validate()?;
    Ok(config.thickness / config.half_leg_angle().tan())
}

/// Footprint of one platform measured along the leg axis.
pub fn platform_diagonal(config: &Configuration) -> Result<Real, GeometryError> {
    config.validate()?;
    Ok(config.platform_width / config.bottom_angle().cos())
}

/// How the platforms of one leg are spread along it.
pub fn platform_distribution(config: &Configuration) -> Result<LinearDistribution, GeometryError> {
    LinearDistribution::new(
        leg_length(config)?,
        platform_diagonal(config)?,
        config.candles_per_leg,
        config.last_platform_margin_factor,
    )
}

pub fn platform_spacing(config: &Configuration) -> Result<Real, GeometryError> {
    platform_distribution(config)?.spacing()
}

/// Platform centres along the leg axis, measured from the apex.
pub fn platform_positions(config: &Configuration) -> Result<Vec<Real>, GeometryError> {
    platform_distribution(config)?.positions()
}

pub fn platform_hole_diameter(config: &Configuration) -> Result<Real, GeometryError> {
    config.validate()?;
    Ok(config.socket_mount_thread.minor_diameter - PLATFORM_HOLE_CLEARANCE)
}

/// Screw position along the bottom panel, measured from the inner leg start.
pub fn bottom_panel_screw_position(config: &Configuration) -> Result<Real, GeometryError> {
    Ok(inner_leg_length(config)? - BOTTOM_PANEL_SCREW_INSET)
}

pub fn foot_size(config: &Configuration) -> Result<Vector3<Real>, GeometryError> {
    Ok(Vector3::new(
        leg_base_width(config)? + config.foot_surface_margin * 2.0,
        config.depth + config.foot_surface_margin * 2.0,
        config.foot_height,
    ))
}

/// Every derived measurement of one configuration, computed together.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedGeometry {
    pub outer_triangle_half: RightTriangle,
    pub height_without_feet: Real,
    pub apex_elevation: Real,
    pub leg_length: Real,
    pub half_triangle_width: Real,
    pub leg_base_width: Real,
    pub z_thickness: Real,
    pub inner_leg_length: Real,
    pub inner_leg_start: Real,
    pub platform_diagonal: Real,
    pub platform_spacing: Real,
    pub platform_positions: Vec<Real>,
    pub platform_hole_diameter: Real,
    pub bottom_panel_screw_position: Real,
    pub foot_size: Vector3<Real>,
}

#[instrument(skip(config), fields(variant = %config.name))]
pub fn derive_geometry(config: &Configuration) -> Result<DerivedGeometry, GeometryError> {
    let outer_triangle_half = outer_triangle_half(config)?;
    let distribution = platform_distribution(config)?;

    let derived = DerivedGeometry {
        outer_triangle_half,
        height_without_feet: config.height_without_feet(),
        apex_elevation: config.apex_elevation(),
        leg_length: outer_triangle_half.hypotenuse(),
        half_triangle_width: outer_triangle_half.bottom_leg(),
        leg_base_width: leg_base_width(config)?,
        z_thickness: z_thickness(config)?,
        inner_leg_length: inner_leg_length(config)?,
        inner_leg_start: inner_leg_start(config)?,
        platform_diagonal: distribution.footprint(),
        platform_spacing: distribution.spacing()?,
        platform_positions: distribution.positions()?,
        platform_hole_diameter: platform_hole_diameter(config)?,
        bottom_panel_screw_position: bottom_panel_screw_position(config)?,
        foot_size: foot_size(config)?,
    };

    debug!(
        leg_length = derived.leg_length,
        half_triangle_width = derived.half_triangle_width,
        inner_leg_length = derived.inner_leg_length,
        platform_spacing = derived.platform_spacing,
        "derived frame geometry"
    );
    Ok(derived)
}
