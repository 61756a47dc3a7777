//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use candle_bridge::float_types::Real;
use nalgebra::{Point2, Point3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise comparison of two points.
pub fn points_close(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

pub fn points_close_2d(a: &Point2<Real>, b: &Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// A handful of leg-local points that exercise every axis.
pub fn sample_points() -> Vec<Point3<Real>> {
    vec![
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(12.5, -3.0, 7.25),
        Point3::new(-40.0, 2.0, -0.5),
    ]
}
