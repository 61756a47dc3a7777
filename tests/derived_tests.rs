mod support;

use approx::assert_relative_eq;
use candle_bridge::{
    Angle, Configuration, GeometryError, derive_geometry,
    config::{ScrewThread, ThreadForm},
    derived::{
        bottom_panel_screw_position, foot_size, half_triangle_width, inner_leg_length,
        inner_leg_start, leg_base_width, leg_length, outer_triangle_half, platform_diagonal,
        platform_hole_diameter, platform_positions, platform_spacing, z_thickness,
    },
    float_types::Real,
};

const SQRT_2: Real = std::f64::consts::SQRT_2 as Real;

#[test]
fn small_variant_at_a_right_angle() {
    let config = Configuration::small();

    // 170 high, 18 mm feet, top platform 8 mm above the apex
    assert_eq!(config.height_without_feet(), 152.0);
    assert_eq!(config.apex_elevation(), 144.0);

    assert_relative_eq!(leg_length(&config).unwrap(), 144.0 * SQRT_2, epsilon = 1e-9);
    assert_relative_eq!(half_triangle_width(&config).unwrap(), 144.0, epsilon = 1e-9);
    assert_relative_eq!(leg_base_width(&config).unwrap(), 30.0 * SQRT_2, epsilon = 1e-9);
    assert_relative_eq!(z_thickness(&config).unwrap(), 30.0 * SQRT_2, epsilon = 1e-9);
    assert_relative_eq!(
        inner_leg_length(&config).unwrap(),
        144.0 * SQRT_2 - 60.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(inner_leg_start(&config).unwrap(), 30.0, epsilon = 1e-9);
    assert_relative_eq!(platform_diagonal(&config).unwrap(), 32.0 * SQRT_2, epsilon = 1e-9);
    assert_relative_eq!(platform_spacing(&config).unwrap(), 41.140_758_178_126, epsilon = 1e-9);
    assert_eq!(platform_hole_diameter(&config).unwrap(), 12.0);
    assert_relative_eq!(
        bottom_panel_screw_position(&config).unwrap(),
        144.0 * SQRT_2 - 69.0,
        epsilon = 1e-9
    );

    let positions = platform_positions(&config).unwrap();
    assert_eq!(positions.len(), 2);
    assert_relative_eq!(positions[0], 63.768_175_176_096, epsilon = 1e-9);
    assert_relative_eq!(positions[1], 150.163_767_350_161, epsilon = 1e-9);

    let foot = foot_size(&config).unwrap();
    assert_relative_eq!(foot.x, 30.0 * SQRT_2 + 16.0, epsilon = 1e-9);
    assert_eq!(foot.y, 46.0);
    assert_eq!(foot.z, 18.0);
}

#[test]
fn large_variant_matches_hand_computed_values() {
    let derived = derive_geometry(&Configuration::large()).unwrap();

    assert_eq!(derived.height_without_feet, 215.0);
    assert_eq!(derived.apex_elevation, 214.0);
    assert_relative_eq!(derived.leg_length, 290.257_124_850_581, epsilon = 1e-9);
    assert_relative_eq!(derived.half_triangle_width, 196.094_871_239_729, epsilon = 1e-9);
    assert_relative_eq!(derived.leg_base_width, 40.690_251_147_278, epsilon = 1e-9);
    assert_relative_eq!(derived.z_thickness, 44.405_616_987_668, epsilon = 1e-9);
    assert_relative_eq!(derived.inner_leg_length, 230.027_934_597_980, epsilon = 1e-9);
    assert_relative_eq!(derived.inner_leg_start, 32.739_255_032_078, epsilon = 1e-9);
    assert_relative_eq!(derived.platform_diagonal, 47.365_991_453_512, epsilon = 1e-9);
    assert_relative_eq!(derived.platform_spacing, 38.898_798_363_527, epsilon = 1e-9);
    assert_eq!(derived.platform_positions.len(), 3);
    assert_relative_eq!(derived.platform_positions[2], 235.111_373_724_363, epsilon = 1e-9);
}

#[test]
fn snapshot_agrees_with_the_individual_functions() {
    for config in Configuration::variants() {
        let derived = derive_geometry(&config).unwrap();
        assert_eq!(derived.outer_triangle_half, outer_triangle_half(&config).unwrap());
        assert_eq!(derived.leg_length, leg_length(&config).unwrap());
        assert_eq!(derived.half_triangle_width, half_triangle_width(&config).unwrap());
        assert_eq!(derived.inner_leg_length, inner_leg_length(&config).unwrap());
        assert_eq!(derived.platform_spacing, platform_spacing(&config).unwrap());
        assert_eq!(derived.platform_positions, platform_positions(&config).unwrap());
        assert_eq!(derived.foot_size, foot_size(&config).unwrap());
    }
}

#[test]
fn derivation_is_pure() {
    let config = Configuration::large();
    let first = derive_geometry(&config).unwrap();
    // unrelated calls in between must not change anything
    let _ = derive_geometry(&Configuration::small()).unwrap();
    let _ = platform_positions(&config).unwrap();
    assert_eq!(derive_geometry(&config).unwrap(), first);
}

#[test]
fn outer_triangle_models_half_the_leg_angle() {
    let config = Configuration::large();
    let t = outer_triangle_half(&config).unwrap();
    assert_eq!(t.left_leg(), config.apex_elevation());
    assert_eq!(t.top_angle(), Angle::from_degrees(42.5));
    assert_eq!(t.bottom_angle(), config.bottom_angle());
}

#[test]
fn degenerate_leg_angles_are_rejected() {
    for degrees in [0.0, 1e-9, -5.0, 180.0, 180.0 - 1e-9, 200.0, Real::NAN, Real::INFINITY] {
        let config = Configuration {
            leg_angle: Angle::from_degrees(degrees),
            ..Configuration::small()
        };
        assert!(
            matches!(derive_geometry(&config), Err(GeometryError::DegenerateAngle(_))),
            "{degrees}° should be rejected"
        );
        assert!(matches!(leg_length(&config), Err(GeometryError::DegenerateAngle(_))));
        assert!(matches!(inner_leg_start(&config), Err(GeometryError::DegenerateAngle(_))));
        assert!(matches!(platform_diagonal(&config), Err(GeometryError::DegenerateAngle(_))));
    }
}

#[test]
fn narrow_and_wide_interior_angles_still_derive() {
    for degrees in [40.0, 150.0] {
        let config = Configuration {
            leg_angle: Angle::from_degrees(degrees),
            candles_per_leg: 1,
            ..Configuration::small()
        };
        let derived = derive_geometry(&config).unwrap();
        assert!(derived.leg_length.is_finite());
        assert!(derived.platform_spacing > 0.0);
    }
}

#[test]
fn too_many_candles_is_an_overconstrained_layout() {
    let config = Configuration {
        candles_per_leg: 10,
        ..Configuration::small()
    };
    assert!(matches!(
        derive_geometry(&config),
        Err(GeometryError::OverconstrainedLayout { count: 10, .. })
    ));
}

#[test]
fn body_thicker_than_the_frame_leaves_no_inner_leg() {
    let config = Configuration {
        thickness: 200.0,
        ..Configuration::small()
    };
    assert!(matches!(
        inner_leg_length(&config),
        Err(GeometryError::InvalidGeometry(_))
    ));
    assert!(matches!(
        derive_geometry(&config),
        Err(GeometryError::InvalidGeometry(_))
    ));
}

#[test]
fn invalid_primary_inputs_name_their_field() {
    let config = Configuration {
        last_platform_margin_factor: -0.5,
        ..Configuration::large()
    };
    assert!(matches!(
        config.validate(),
        Err(GeometryError::InvalidConfiguration {
            field: "last_platform_margin_factor",
            ..
        })
    ));

    let config = Configuration {
        top_platform_elevation: 300.0,
        ..Configuration::large()
    };
    assert!(matches!(
        derive_geometry(&config),
        Err(GeometryError::InvalidConfiguration { field: "height", .. })
    ));

    let mut config = Configuration::small();
    config.candle_thread.minor_diameter = 19.0;
    assert!(matches!(
        config.validate(),
        Err(GeometryError::InvalidConfiguration {
            field: "candle_thread",
            ..
        })
    ));
}

#[test]
fn built_in_variants_are_valid() {
    let variants = Configuration::variants();
    assert_eq!(variants.len(), 2);
    for config in &variants {
        config.validate().unwrap();
    }
    assert!(variants[0].has_split_body_variant);
    assert!(!variants[1].has_split_body_variant);
    assert_eq!(variants[1].platform_width, variants[0].platform_width);
}

#[test]
fn configuration_survives_serialization() {
    let config = Configuration::large();
    let json = serde_json::to_string(&config).unwrap();
    let back: Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    assert!(json.contains("\"leg_angle\":85.0"), "{json}");
}

#[test]
fn thread_specs_of_the_large_variant() {
    let config = Configuration::large();
    assert_eq!(config.candle_thread.depth(), 0.5);
    assert_eq!(config.socket_mount_thread.depth(), 0.5);
    assert!(matches!(
        config.candle_thread.form,
        ThreadForm::Trapezoidal { angle, .. } if angle == Angle::RIGHT
    ));

    let m3 = config.mount_bolt.thread;
    assert_eq!(m3, ScrewThread::m3());
    assert_eq!(m3.form, ThreadForm::IsoMetric);
    assert_relative_eq!(m3.depth(), 0.3065, epsilon = 1e-12);
}
