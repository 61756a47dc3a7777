//! Property-based tests for the solver and the distributor using `proptest`.

use proptest::prelude::*;

use candle_bridge::{Angle, LinearDistribution, RightTriangle, float_types::Real};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_length() -> impl Strategy<Value = Real> {
    (1.0 as Real)..1000.0
}

/// Acute angle in degrees, away from the degenerate ends.
fn arb_acute_degrees() -> impl Strategy<Value = Real> {
    (0.5 as Real)..89.5
}

fn relative_close(a: Real, b: Real, tol: Real) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs())
}

const TOL: Real = 1e-9;

// ---------------------------------------------------------------------------
// RightTriangle
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn acute_angles_are_complementary(b in arb_length(), l in arb_length()) {
        let t = RightTriangle::from_legs(b, l).unwrap();
        let sum = (t.top_angle() + t.bottom_angle()).degrees();
        prop_assert!((sum - 90.0).abs() < TOL, "angles sum to {}", sum);
        prop_assert!(t.top_angle().is_acute() && t.bottom_angle().is_acute());
    }

    #[test]
    fn pythagoras_holds(b in arb_length(), l in arb_length()) {
        let t = RightTriangle::from_legs(b, l).unwrap();
        let h = t.hypotenuse();
        prop_assert!(relative_close(h * h, b * b + l * l, TOL));
        prop_assert!(relative_close(t.top_angle().sin(), b / h, TOL));
    }

    #[test]
    fn every_constructor_round_trips(b in arb_length(), l in arb_length()) {
        let t = RightTriangle::from_legs(b, l).unwrap();
        let (top, bottom, h) = (t.top_angle(), t.bottom_angle(), t.hypotenuse());

        let rebuilt = [
            RightTriangle::from_bottom_leg_and_hypotenuse(b, h),
            RightTriangle::from_left_leg_and_hypotenuse(l, h),
            RightTriangle::from_bottom_leg_and_top_angle(b, top),
            RightTriangle::from_bottom_leg_and_bottom_angle(b, bottom),
            RightTriangle::from_left_leg_and_top_angle(l, top),
            RightTriangle::from_left_leg_and_bottom_angle(l, bottom),
            RightTriangle::from_hypotenuse_and_top_angle(h, top),
            RightTriangle::from_hypotenuse_and_bottom_angle(h, bottom),
        ];
        for candidate in rebuilt {
            let candidate = candidate.unwrap();
            prop_assert!(
                relative_close(candidate.hypotenuse(), h, TOL),
                "hypotenuse {} != {}", candidate.hypotenuse(), h
            );
        }
    }

    #[test]
    fn scaling_keeps_angles(
        h in arb_length(),
        degrees in arb_acute_degrees(),
        target in arb_length(),
    ) {
        let t = RightTriangle::from_hypotenuse_and_top_angle(h, Angle::from_degrees(degrees)).unwrap();
        let scaled = t.with_hypotenuse(target).unwrap();
        prop_assert_eq!(scaled.hypotenuse(), target);
        prop_assert_eq!(scaled.top_angle(), t.top_angle());
        prop_assert_eq!(scaled.bottom_angle(), t.bottom_angle());
        prop_assert!(relative_close(scaled.area(), t.area() * (target / h).powi(2), TOL));
    }
}

// ---------------------------------------------------------------------------
// LinearDistribution
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn positions_fit_and_increase(
        length in (10.0 as Real)..2000.0,
        footprint in (1.0 as Real)..50.0,
        count in 0usize..8,
        margin in (0.0 as Real)..2.0,
    ) {
        let layout = LinearDistribution::new(length, footprint, count, margin).unwrap();
        match layout.positions() {
            Ok(positions) => {
                prop_assert_eq!(positions.len(), count);
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
                for p in &positions {
                    prop_assert!(p + footprint / 2.0 < length);
                }
            },
            Err(_) => {
                // only a layout without room may fail
                prop_assert!(length - footprint / 2.0 - count as Real * footprint <= 0.0);
            },
        }
    }

    #[test]
    fn longer_legs_space_items_further_apart(
        length in (100.0 as Real)..1000.0,
        footprint in (1.0 as Real)..10.0,
        count in 1usize..8,
        margin in (0.0 as Real)..2.0,
    ) {
        let short = LinearDistribution::new(length, footprint, count, margin).unwrap();
        let long = LinearDistribution::new(2.0 * length, footprint, count, margin).unwrap();
        prop_assert!(long.spacing().unwrap() > short.spacing().unwrap());
        prop_assert_eq!(short.positions().unwrap(), short.positions().unwrap());
    }
}
