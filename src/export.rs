//! Hands the derived geometry of a variant to a geometry kernel as JSON.

use crate::config::{Configuration, PRINT_TOLERANCE};
use crate::derived::{DerivedGeometry, derive_geometry};
use crate::errors::ExportError;
use crate::float_types::Real;
use crate::outline;
use crate::placement::{
    FootPlacement, PanelMountPlacement, PlatformPlacement, foot_placements,
    panel_mount_placements, platform_placements,
};
use geo::{LineString, MultiPolygon};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File written into each variant folder.
pub const GEOMETRY_FILE: &str = "geometry.json";

/// Everything a geometry kernel needs to build one variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariantGeometry<'a> {
    pub configuration: &'a Configuration,
    pub derived: DerivedGeometry,
    pub platforms: Vec<PlatformPlacement>,
    pub feet: [FootPlacement; 2],
    pub panel_mounts: Vec<PanelMountPlacement>,
    pub half_outline: Vec<[Real; 2]>,
    pub panel_rails: Vec<Vec<[Real; 2]>>,
}

fn points(line: &LineString<Real>) -> Vec<[Real; 2]> {
    line.coords().map(|c| [c.x, c.y]).collect()
}

fn rails(sections: &MultiPolygon<Real>) -> Vec<Vec<[Real; 2]>> {
    sections.iter().map(|rail| points(rail.exterior())).collect()
}

impl<'a> VariantGeometry<'a> {
    pub fn new(config: &'a Configuration) -> Result<Self, ExportError> {
        Ok(VariantGeometry {
            configuration: config,
            derived: derive_geometry(config)?,
            platforms: platform_placements(config)?,
            feet: foot_placements(config)?,
            panel_mounts: panel_mount_placements(config)?,
            half_outline: points(&outline::half_outline_anchors(config)?),
            panel_rails: rails(&outline::panel_rail_sections(config, PRINT_TOLERANCE)?),
        })
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes `<root>/<variant name>/geometry.json` and returns its path.
#[instrument(skip(config), fields(variant = %config.name))]
pub fn write_variant(config: &Configuration, root: &Path) -> Result<PathBuf, ExportError> {
    let json = VariantGeometry::new(config)?.to_json()?;

    let folder = root.join(&config.name);
    fs::create_dir_all(&folder).map_err(|source| ExportError::Io {
        path: folder.clone(),
        source,
    })?;

    let path = folder.join(GEOMETRY_FILE);
    fs::write(&path, json).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "wrote variant geometry");
    Ok(path)
}
