//! Where the geometry kernel puts every repeated sub-part.

use crate::angle::Angle;
use crate::config::Configuration;
use crate::derived;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::transform::{Transform3D, apex_transform, opposite_leg, top_platform_transform};
use crate::transform::frame::platform_transform_at;
use serde::Serialize;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LegSide {
    Right,
    Left,
}

/// Which platform a placement is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PlatformSlot {
    /// The single platform on top of the apex
    Top,
    /// Platform `index` on one leg, counted from the apex
    Leg { index: usize, side: LegSide },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlatformPlacement {
    pub slot: PlatformSlot,
    /// Centre along the leg axis, measured from the apex; `None` for the top platform
    pub position: Option<Real>,
    pub transform: Transform3D,
}

fn leg_pair(config: &Configuration, index: usize, position: Real, apex: &Transform3D) -> [PlatformPlacement; 2] {
    let right = platform_transform_at(config, position, apex);
    [
        PlatformPlacement {
            slot: PlatformSlot::Leg {
                index,
                side: LegSide::Right,
            },
            position: Some(position),
            transform: right,
        },
        PlatformPlacement {
            slot: PlatformSlot::Leg {
                index,
                side: LegSide::Left,
            },
            position: Some(position),
            transform: opposite_leg(&right),
        },
    ]
}

/// The top platform followed by a right/left pair for every platform index.
#[instrument(skip(config), fields(variant = %config.name))]
pub fn platform_placements(config: &Configuration) -> Result<Vec<PlatformPlacement>, GeometryError> {
    let positions = derived::platform_positions(config)?;
    let apex = apex_transform(config)?;

    let mut placements = Vec::with_capacity(1 + 2 * positions.len());
    placements.push(PlatformPlacement {
        slot: PlatformSlot::Top,
        position: None,
        transform: top_platform_transform(config)?,
    });

    #[cfg(feature = "parallel")]
    let pairs: Vec<[PlatformPlacement; 2]> = positions
        .par_iter()
        .enumerate()
        .map(|(index, &position)| leg_pair(config, index, position, &apex))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let pairs: Vec<[PlatformPlacement; 2]> = positions
        .iter()
        .enumerate()
        .map(|(index, &position)| leg_pair(config, index, position, &apex))
        .collect();

    placements.extend(pairs.into_iter().flatten());

    debug!(count = placements.len(), "placed platforms");
    Ok(placements)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FootPlacement {
    pub side: LegSide,
    pub has_power_inlet: bool,
    pub transform: Transform3D,
}

/// One foot under each leg, centred on its footprint. The right foot carries
/// the power inlet; the left one is the same part turned around.
pub fn foot_placements(config: &Configuration) -> Result<[FootPlacement; 2], GeometryError> {
    let x = derived::half_triangle_width(config)? - derived::leg_base_width(config)? / 2.0;
    let right = Transform3D::translation(x, 0.0, 0.0);
    Ok([
        FootPlacement {
            side: LegSide::Right,
            has_power_inlet: true,
            transform: right,
        },
        FootPlacement {
            side: LegSide::Left,
            has_power_inlet: false,
            transform: right.rotated_z(Angle::STRAIGHT),
        },
    ])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PanelMountKind {
    /// Threaded block holding the bottom panel screw
    Screw,
    /// Plain block supporting the middle of the bottom panel
    Support,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelMountPlacement {
    pub kind: PanelMountKind,
    pub side: LegSide,
    pub transform: Transform3D,
}

/// Mounting blocks for the bottom panels inside both legs, in the frame of the
/// finished piece (standing on its feet).
#[instrument(skip(config), fields(variant = %config.name))]
pub fn panel_mount_placements(config: &Configuration) -> Result<Vec<PanelMountPlacement>, GeometryError> {
    let apex = apex_transform(config)?;
    let inner_leg_start = derived::inner_leg_start(config)?;
    let lift = derived::foot_size(config)?.z;
    let z = -config.thickness + config.bottom_panel_inset + config.bottom_panel_thickness;

    let mounts = [
        (
            PanelMountKind::Screw,
            inner_leg_start + derived::bottom_panel_screw_position(config)?,
        ),
        (
            PanelMountKind::Support,
            inner_leg_start + derived::inner_leg_length(config)? / 2.0,
        ),
    ];

    let mut placements = Vec::with_capacity(mounts.len() * 2);
    for (kind, position) in mounts {
        let right = Transform3D::translation(position, 0.0, z).concatenated(&apex);
        for (side, turn) in [(LegSide::Right, Angle::ZERO), (LegSide::Left, Angle::STRAIGHT)] {
            placements.push(PanelMountPlacement {
                kind,
                side,
                transform: right.rotated_z(turn).translated(0.0, 0.0, lift),
            });
        }
    }
    Ok(placements)
}
