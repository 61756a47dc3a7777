//! Rigid transforms and the frame chain that places leg-local geometry.
//!
//! Every chaining method applies its step *after* the transform it is called
//! on, so `a.translated(..).concatenated(&b)` reads in the order the steps
//! happen to a point.

use crate::angle::Angle;
use crate::float_types::Real;
use geo::AffineTransform;
use nalgebra::{Matrix3, Matrix4, Point2, Point3, Rotation2, Rotation3, Translation2, Translation3, Vector2, Vector3};
use serde::Serialize;

pub mod frame;

pub use frame::{
    apex_transform, apex_transform_2d, leg_transform, mirrored_leg, opposite_leg,
    platform_transform, top_platform_transform,
};

/// A mirror that negates exactly one coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SymmetryPlane {
    /// Negates X, reflecting across the YZ plane
    X,
    /// Negates Y, reflecting across the XZ plane
    Y,
    /// Negates Z, reflecting across the XY plane
    Z,
}

impl SymmetryPlane {
    pub fn normal(self) -> Vector3<Real> {
        match self {
            SymmetryPlane::X => Vector3::x(),
            SymmetryPlane::Y => Vector3::y(),
            SymmetryPlane::Z => Vector3::z(),
        }
    }
}

/// A 3D affine transform stored as a homogeneous 4×4 matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transform3D(Matrix4<Real>);

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    pub fn identity() -> Self {
        Transform3D(Matrix4::identity())
    }

    pub const fn from_matrix(matrix: Matrix4<Real>) -> Self {
        Transform3D(matrix)
    }

    pub const fn matrix(&self) -> &Matrix4<Real> {
        &self.0
    }

    pub fn translation(x: Real, y: Real, z: Real) -> Self {
        Self::translation_vector(Vector3::new(x, y, z))
    }

    pub fn translation_vector(vector: Vector3<Real>) -> Self {
        Transform3D(Translation3::from(vector).to_homogeneous())
    }

    pub fn rotation_x(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rotation(Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        ))
    }

    pub fn rotation_y(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rotation(Matrix3::new(
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        ))
    }

    pub fn rotation_z(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rotation(Matrix3::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        ))
    }

    fn from_rotation(matrix: Matrix3<Real>) -> Self {
        Transform3D(Rotation3::from_matrix_unchecked(matrix).to_homogeneous())
    }

    pub fn scaling(sx: Real, sy: Real, sz: Real) -> Self {
        Transform3D(Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
    }

    /// Reflection across `plane` through the origin.
    pub fn mirror(plane: SymmetryPlane) -> Self {
        // R = I - 2 n n^T
        let n = plane.normal();
        let mut reflect_4 = Matrix4::identity();
        let reflect_3 = Matrix3::identity() - 2.0 * n * n.transpose();
        reflect_4.fixed_view_mut::<3, 3>(0, 0).copy_from(&reflect_3);
        Transform3D(reflect_4)
    }

    /// `self` followed by `next`.
    pub fn concatenated(&self, next: &Transform3D) -> Self {
        Transform3D(next.0 * self.0)
    }

    pub fn translated(&self, x: Real, y: Real, z: Real) -> Self {
        self.concatenated(&Self::translation(x, y, z))
    }

    pub fn rotated_x(&self, angle: Angle) -> Self {
        self.concatenated(&Self::rotation_x(angle))
    }

    pub fn rotated_y(&self, angle: Angle) -> Self {
        self.concatenated(&Self::rotation_y(angle))
    }

    pub fn rotated_z(&self, angle: Angle) -> Self {
        self.concatenated(&Self::rotation_z(angle))
    }

    pub fn mirrored(&self, plane: SymmetryPlane) -> Self {
        self.concatenated(&Self::mirror(plane))
    }

    pub fn inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Transform3D)
    }

    pub fn apply_point(&self, point: &Point3<Real>) -> Point3<Real> {
        self.0.transform_point(point)
    }

    /// Applies the linear part only; translation does not move vectors.
    pub fn apply_vector(&self, vector: &Vector3<Real>) -> Vector3<Real> {
        self.0.transform_vector(vector)
    }

    /// Where the local origin ends up.
    pub fn origin(&self) -> Point3<Real> {
        self.apply_point(&Point3::origin())
    }
}

/// A planar affine transform stored as a homogeneous 3×3 matrix, for cross
/// sections that are worked on before extrusion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transform2D(Matrix3<Real>);

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Transform2D(Matrix3::identity())
    }

    pub const fn matrix(&self) -> &Matrix3<Real> {
        &self.0
    }

    pub fn translation(x: Real, y: Real) -> Self {
        Transform2D(Translation2::from(Vector2::new(x, y)).to_homogeneous())
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotation(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        let rotation = Rotation2::from_matrix_unchecked(nalgebra::Matrix2::new(c, -s, s, c));
        Transform2D(rotation.to_homogeneous())
    }

    pub fn concatenated(&self, next: &Transform2D) -> Self {
        Transform2D(next.0 * self.0)
    }

    pub fn translated(&self, x: Real, y: Real) -> Self {
        self.concatenated(&Self::translation(x, y))
    }

    pub fn rotated(&self, angle: Angle) -> Self {
        self.concatenated(&Self::rotation(angle))
    }

    pub fn inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Transform2D)
    }

    pub fn apply_point(&self, point: &Point2<Real>) -> Point2<Real> {
        self.0.transform_point(point)
    }

    /// The same transform in the form `geo` geometries accept.
    pub fn to_affine(&self) -> AffineTransform<Real> {
        let m = &self.0;
        AffineTransform::new(m[(0, 0)], m[(0, 1)], m[(0, 2)], m[(1, 0)], m[(1, 1)], m[(1, 2)])
    }
}
