//! Primary design inputs for one product variant.
//!
//! A [`Configuration`] is built once per variant and only ever read afterwards;
//! every secondary measurement is derived from it on demand by the functions in
//! [`crate::derived`], [`crate::transform`] and [`crate::placement`], which all
//! take it by reference.

use crate::angle::Angle;
use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use serde::{Deserialize, Serialize};

mod variants;

/// Clearance the printed parts need between mating surfaces.
pub const PRINT_TOLERANCE: Real = 0.2;

/// Profile of a screw thread.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ThreadForm {
    Trapezoidal { angle: Angle, crest_width: Real },
    IsoMetric,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrewThread {
    pub pitch: Real,
    pub major_diameter: Real,
    pub minor_diameter: Real,
    pub form: ThreadForm,
}

impl ScrewThread {
    pub const fn new(pitch: Real, major_diameter: Real, minor_diameter: Real, form: ThreadForm) -> Self {
        Self {
            pitch,
            major_diameter,
            minor_diameter,
            form,
        }
    }

    /// ISO metric coarse M3.
    pub const fn m3() -> Self {
        Self::new(0.5, 3.0, 2.387, ThreadForm::IsoMetric)
    }

    /// Radial depth of the thread profile.
    pub fn depth(&self) -> Real {
        (self.major_diameter - self.minor_diameter) / 2.0
    }

    fn validate(&self, field: &'static str) -> Result<(), GeometryError> {
        for value in [self.pitch, self.major_diameter, self.minor_diameter] {
            positive(field, value)?;
        }
        if self.minor_diameter >= self.major_diameter {
            return Err(GeometryError::invalid_configuration(
                field,
                format!(
                    "minor diameter {} must be smaller than major diameter {}",
                    self.minor_diameter, self.major_diameter
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltHead {
    PhillipsCountersunk,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    pub head: BoltHead,
    pub thread: ScrewThread,
    pub length: Real,
}

impl Bolt {
    pub const fn phillips_countersunk_m3(length: Real) -> Self {
        Self {
            head: BoltHead::PhillipsCountersunk,
            thread: ScrewThread::m3(),
            length,
        }
    }
}

/// The primary inputs of a candle bridge. Lengths are in millimetres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    pub has_split_body_variant: bool,

    pub candles_per_leg: usize,
    /// Full angle between the two legs at the apex
    pub leg_angle: Angle,
    /// From the floor to the top platform
    pub height: Real,
    pub wall_thickness: Real,

    pub depth: Real,
    /// Thickness of the body, measured perpendicular to the leg
    pub thickness: Real,
    pub mount_bolt: Bolt,

    pub bottom_panel_inset: Real,
    pub bottom_panel_thickness: Real,

    pub platform_width: Real,
    pub top_platform_width: Real,
    pub top_platform_elevation: Real,
    /// Share of one platform spacing left open after the last platform on a leg
    pub last_platform_margin_factor: Real,
    pub platform_corner_radius: Real,

    pub platform_square_size: Real,
    pub socket_mount_thread: ScrewThread,
    pub candle_thread: ScrewThread,
    pub platform_threads_height: Real,

    pub candle_height: Real,
    pub candle_wall_thickness: Real,
    pub candle_outer_diameter: Real,

    pub foot_surface_margin: Real,
    pub foot_height: Real,
    pub foot_panel_thickness: Real,
    pub power_inlet_hole_diameter: Real,
}

fn positive(field: &'static str, value: Real) -> Result<Real, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid_configuration(
            field,
            format!("must be a positive, finite number (got {value})"),
        ))
    }
}

fn non_negative(field: &'static str, value: Real) -> Result<Real, GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid_configuration(
            field,
            format!("must be a non-negative, finite number (got {value})"),
        ))
    }
}

impl Configuration {
    pub fn height_without_feet(&self) -> Real {
        self.height - self.foot_height
    }

    /// Half of the leg angle, the top angle of each outer half triangle.
    pub fn half_leg_angle(&self) -> Angle {
        self.leg_angle / 2.0
    }

    /// Angle between a leg and the floor.
    pub fn bottom_angle(&self) -> Angle {
        self.half_leg_angle().complement()
    }

    /// Height of the apex, where the outer edges of both legs meet.
    pub fn apex_elevation(&self) -> Real {
        self.height_without_feet() - self.top_platform_elevation
    }

    /// Checks every primary input before anything is derived from it.
    ///
    /// The leg angle must lie strictly inside (0°, 180°): at either end the
    /// half-angle trigonometry divides by zero.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let leg_angle = self.leg_angle.degrees();
        if !leg_angle.is_finite() || leg_angle <= tolerance() || leg_angle >= 180.0 - tolerance() {
            return Err(GeometryError::DegenerateAngle(leg_angle));
        }

        positive("height", self.height)?;
        positive("wall_thickness", self.wall_thickness)?;
        positive("depth", self.depth)?;
        positive("thickness", self.thickness)?;
        positive("mount_bolt.length", self.mount_bolt.length)?;
        positive("bottom_panel_inset", self.bottom_panel_inset)?;
        positive("bottom_panel_thickness", self.bottom_panel_thickness)?;
        positive("platform_width", self.platform_width)?;
        positive("top_platform_width", self.top_platform_width)?;
        non_negative("top_platform_elevation", self.top_platform_elevation)?;
        non_negative("last_platform_margin_factor", self.last_platform_margin_factor)?;
        positive("platform_corner_radius", self.platform_corner_radius)?;
        positive("platform_square_size", self.platform_square_size)?;
        positive("platform_threads_height", self.platform_threads_height)?;
        positive("candle_height", self.candle_height)?;
        positive("candle_wall_thickness", self.candle_wall_thickness)?;
        positive("candle_outer_diameter", self.candle_outer_diameter)?;
        non_negative("foot_surface_margin", self.foot_surface_margin)?;
        positive("foot_height", self.foot_height)?;
        positive("foot_panel_thickness", self.foot_panel_thickness)?;
        positive("power_inlet_hole_diameter", self.power_inlet_hole_diameter)?;

        self.mount_bolt.thread.validate("mount_bolt.thread")?;
        self.socket_mount_thread.validate("socket_mount_thread")?;
        self.candle_thread.validate("candle_thread")?;

        if self.apex_elevation() <= 0.0 {
            return Err(GeometryError::invalid_configuration(
                "height",
                format!(
                    "leaves no room for the legs: {} minus feet ({}) and top platform elevation ({}) is not positive",
                    self.height, self.foot_height, self.top_platform_elevation
                ),
            ));
        }

        Ok(())
    }
}
