//! Planar cross sections of the body, drawn in the XY plane with Y up.
//!
//! Only the straight anchor geometry lives here. Rounding the outline into
//! curves and extruding it is left to the geometry kernel.

use crate::config::Configuration;
use crate::derived;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::transform::{apex_transform, apex_transform_2d};
use crate::transform::frame::platform_transform_at;
use geo::{
    AffineOps, BooleanOps, BoundingRect, Coord, LineString, MultiPolygon, Polygon as GeoPolygon,
    Rect, coord,
};
use nalgebra::Point3;

/// Horizontal run of the shoulder the outline makes into each platform.
const PLATFORM_SHOULDER: Real = 10.0;
/// How far the panel rails run past both ends of the inner leg before they are
/// clipped to the body.
const PANEL_RAIL_EXTENSION: Real = 100.0;

/// Anchor points of the right half of the body outline, from the top of the
/// symmetry axis, down the outer edge past every platform, across the foot and
/// back up the inner edge to the axis.
pub fn half_outline_anchors(config: &Configuration) -> Result<LineString<Real>, GeometryError> {
    let apex = apex_transform(config)?;
    let positions = derived::platform_positions(config)?;
    let half_triangle_width = derived::half_triangle_width(config)?;
    let leg_base_width = derived::leg_base_width(config)?;
    let z_thickness = derived::z_thickness(config)?;
    let top = config.height_without_feet();

    let mut coords = vec![
        coord! {x: 0.0, y: top},
        coord! {x: config.top_platform_width / 2.0, y: top},
    ];
    for &position in &positions {
        let outer = platform_transform_at(config, position, &apex)
            .apply_point(&Point3::new(config.platform_width / 2.0, 0.0, 0.0));
        coords.push(coord! {x: outer.x - PLATFORM_SHOULDER, y: outer.z});
        coords.push(coord! {x: outer.x, y: outer.z});
    }
    coords.push(coord! {x: half_triangle_width, y: 0.0});
    coords.push(coord! {x: half_triangle_width - leg_base_width, y: 0.0});
    coords.push(coord! {x: 0.0, y: config.apex_elevation() - z_thickness});

    Ok(LineString::new(coords))
}

/// The full outline, the anchors mirrored across the symmetry axis.
pub fn outline_polygon(config: &Configuration) -> Result<GeoPolygon<Real>, GeometryError> {
    let half = half_outline_anchors(config)?;
    let mut coords: Vec<Coord<Real>> = half.0.clone();
    coords.extend(
        half.0
            .iter()
            .rev()
            .filter(|c| c.x != 0.0)
            .map(|c| coord! {x: -c.x, y: c.y}),
    );
    Ok(GeoPolygon::new(LineString::new(coords), vec![]))
}

/// The two rails the bottom panel slides between, placed along the inner edge
/// of the right leg. `tolerance` is the print clearance taken off the rail
/// height so the panel fits.
///
/// The rails are clipped to `x >= 0` (the symmetry plane) and
/// `y >= -wall_thickness` (the floor of the body), so they end flush with it.
pub fn panel_rail_sections(
    config: &Configuration,
    tolerance: Real,
) -> Result<MultiPolygon<Real>, GeometryError> {
    let apex = apex_transform_2d(config)?;
    let inner_leg_length = derived::inner_leg_length(config)?;
    let inner_leg_start = derived::inner_leg_start(config)?;

    let rail_height = config.bottom_panel_inset - tolerance;
    if !(tolerance.is_finite() && tolerance >= 0.0 && rail_height > 0.0) {
        return Err(GeometryError::invalid_configuration(
            "tolerance",
            format!(
                "must be non-negative and smaller than the panel inset {} (got {tolerance})",
                config.bottom_panel_inset
            ),
        ));
    }

    let width = inner_leg_length + 2.0 * PANEL_RAIL_EXTENSION;
    let x0 = inner_leg_start - PANEL_RAIL_EXTENSION;
    let y0 = -config.thickness;

    let rails = [0.0, config.bottom_panel_inset + config.bottom_panel_thickness]
        .into_iter()
        .map(|dy| {
            Rect::new(
                coord! {x: x0, y: y0 + dy},
                coord! {x: x0 + width, y: y0 + dy + rail_height},
            )
            .to_polygon()
        })
        .collect::<Vec<_>>();

    let placed = MultiPolygon::new(rails).affine_transform(&apex.to_affine());
    let Some(bounds) = placed.bounding_rect() else {
        return Ok(placed);
    };
    let floor = -config.wall_thickness;
    let body = Rect::new(
        coord! {x: 0.0, y: floor},
        coord! {x: bounds.max().x.max(0.0) + 1.0, y: bounds.max().y.max(floor) + 1.0},
    )
    .to_polygon();

    Ok(placed
        .iter()
        .flat_map(|rail| rail.intersection(&body))
        .collect())
}
