//! Geometry errors

use crate::float_types::Real;

/// All the ways deriving the frame geometry can fail.
///
/// Every variant describes a configuration bug rather than a transient
/// condition, so none of them are retried: the caller that supplied the
/// [`Configuration`](crate::config::Configuration) has to correct it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (InvalidGeometry) A right triangle was asked for with non-positive or
    /// non-finite sides, a non-acute angle, or a hypotenuse that does not exceed its leg
    #[error("(InvalidGeometry) {0}")]
    InvalidGeometry(String),

    /// (OverconstrainedLayout) More items were requested than fit along the length
    #[error(
        "(OverconstrainedLayout) {count} items of footprint {footprint} do not fit in length {length} (spacing would be {spacing})"
    )]
    OverconstrainedLayout {
        count: usize,
        footprint: Real,
        length: Real,
        spacing: Real,
    },

    /// (DegenerateAngle) The leg angle is not strictly within (0°, 180°)
    #[error("(DegenerateAngle) leg angle {0}° must lie strictly between 0° and 180°")]
    DegenerateAngle(Real),

    /// (InvalidConfiguration) Some other primary input is out of range
    #[error("(InvalidConfiguration) `{field}` {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// (PlatformIndexOutOfRange) A platform index beyond the per-leg count
    #[error("(PlatformIndexOutOfRange) platform {index} requested but each leg carries {count}")]
    PlatformIndexOutOfRange { index: usize, count: usize },
}

impl GeometryError {
    pub(crate) fn invalid_geometry(message: impl Into<String>) -> Self {
        GeometryError::InvalidGeometry(message.into())
    }

    pub(crate) fn invalid_configuration(field: &'static str, reason: impl Into<String>) -> Self {
        GeometryError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Failures while writing a variant out for the geometry kernel.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// (Geometry) The variant itself does not derive
    #[error("(Geometry) {0}")]
    Geometry(#[from] GeometryError),

    /// (Serialization) The geometry could not be encoded as JSON
    #[error("(Serialization) {0}")]
    Serialization(#[from] serde_json::Error),

    /// (Io) A folder or file could not be written
    #[error("(Io) {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
