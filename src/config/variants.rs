use super::{Bolt, Configuration, ScrewThread, ThreadForm};
use crate::angle::Angle;
use crate::float_types::Real;

const fn trapezoidal_thread(major_diameter: Real, minor_diameter: Real) -> ScrewThread {
    ScrewThread::new(
        1.5,
        major_diameter,
        minor_diameter,
        ThreadForm::Trapezoidal {
            angle: Angle::RIGHT,
            crest_width: 0.2,
        },
    )
}

impl Configuration {
    /// Three candles per leg, tall enough to be printed as a split body.
    pub fn large() -> Self {
        Configuration {
            name: "Large".to_string(),
            has_split_body_variant: true,

            candles_per_leg: 3,
            leg_angle: Angle::from_degrees(85.0),
            height: 233.0,

            wall_thickness: 2.5,

            depth: 30.0,
            thickness: 30.0,
            mount_bolt: Bolt::phillips_countersunk_m3(16.0),

            bottom_panel_inset: 2.5,
            bottom_panel_thickness: 2.5,

            platform_width: 32.0,
            top_platform_width: 45.0,
            top_platform_elevation: 1.0,
            last_platform_margin_factor: 0.2,
            platform_corner_radius: 4.0,

            platform_square_size: 10.0,
            socket_mount_thread: trapezoidal_thread(14.0, 13.0),
            candle_thread: trapezoidal_thread(18.0, 17.0),
            platform_threads_height: 7.0,

            candle_height: 100.0,
            candle_wall_thickness: 1.0,
            candle_outer_diameter: 20.0,

            foot_surface_margin: 8.0,
            foot_height: 18.0,
            foot_panel_thickness: 3.0,
            power_inlet_hole_diameter: 8.0,
        }
    }

    /// Two candles per leg at a right angle.
    pub fn small() -> Self {
        Configuration {
            name: "Small".to_string(),
            has_split_body_variant: false,

            candles_per_leg: 2,
            leg_angle: Angle::RIGHT,
            height: 170.0,

            candle_height: 90.0,
            candle_wall_thickness: 1.5,

            top_platform_elevation: 8.0,

            ..Self::large()
        }
    }

    /// Every built-in product variant.
    pub fn variants() -> Vec<Self> {
        vec![Self::large(), Self::small()]
    }
}
