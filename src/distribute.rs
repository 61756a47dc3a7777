//! Even distribution of equally sized items along a straight length.

use crate::errors::GeometryError;
use crate::float_types::Real;
use nalgebra::{Unit, Vector3};
use serde::Serialize;

/// `count` items of `footprint` length laid out along `length`.
///
/// Half a footprint is held back as clearance and the slack left after the items
/// is split into `count` equal gaps, one before every item, plus `margin_factor`
/// of a gap that ends up as extra room past the last item.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearDistribution {
    length: Real,
    footprint: Real,
    count: usize,
    margin_factor: Real,
}

impl LinearDistribution {
    pub fn new(
        length: Real,
        footprint: Real,
        count: usize,
        margin_factor: Real,
    ) -> Result<Self, GeometryError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(GeometryError::invalid_geometry(format!(
                "distribution length must be a positive, finite number (got {length})"
            )));
        }
        if !(footprint.is_finite() && footprint > 0.0) {
            return Err(GeometryError::invalid_geometry(format!(
                "item footprint must be a positive, finite number (got {footprint})"
            )));
        }
        if !(margin_factor.is_finite() && margin_factor >= 0.0) {
            return Err(GeometryError::invalid_configuration(
                "margin_factor",
                format!("must be a non-negative, finite number (got {margin_factor})"),
            ));
        }
        Ok(Self {
            length,
            footprint,
            count,
            margin_factor,
        })
    }

    #[inline]
    pub const fn length(&self) -> Real {
        self.length
    }

    #[inline]
    pub const fn footprint(&self) -> Real {
        self.footprint
    }

    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub const fn margin_factor(&self) -> Real {
        self.margin_factor
    }

    /// The gap before each item.
    ///
    /// Fails with [`GeometryError::OverconstrainedLayout`] when the items do not
    /// leave a strictly positive gap. With no items and no trailing margin the
    /// whole slack counts as the gap.
    pub fn spacing(&self) -> Result<Real, GeometryError> {
        let count = self.count as Real;
        let slack = self.length - self.footprint / 2.0 - count * self.footprint;
        let shares = count + self.margin_factor;
        let spacing = if shares > 0.0 { slack / shares } else { slack };

        if spacing.is_finite() && spacing > 0.0 {
            Ok(spacing)
        } else {
            tracing::warn!(
                count = self.count,
                footprint = self.footprint,
                length = self.length,
                spacing,
                "items do not fit along the length"
            );
            Err(GeometryError::OverconstrainedLayout {
                count: self.count,
                footprint: self.footprint,
                length: self.length,
                spacing,
            })
        }
    }

    /// Item centres measured from the closed end, strictly increasing.
    pub fn positions(&self) -> Result<Vec<Real>, GeometryError> {
        let spacing = self.spacing()?;
        let first = self.footprint / 2.0 + spacing;
        let step = spacing + self.footprint;

        Ok((0..self.count)
            .map(|i| first + step * i as Real)
            .collect())
    }

    /// Translation vectors for every item along `direction`.
    pub fn offsets_along(
        &self,
        direction: Unit<Vector3<Real>>,
    ) -> Result<Vec<Vector3<Real>>, GeometryError> {
        Ok(self
            .positions()?
            .into_iter()
            .map(|position| direction.into_inner() * position)
            .collect())
    }
}
