//! Parametric geometry for a **two-leg candle bridge**: a symmetric apex frame
//! whose splayed legs each carry a row of evenly spaced candle platforms.
//!
//! From a handful of primary inputs ([`Configuration`]) the crate solves every
//! dependent dimension, the rigid transforms that carry leg-local geometry
//! into the frame, and the placement of every platform. Solid modelling itself
//! (booleans, lofts, meshing, mesh files) belongs to an external geometry kernel,
//! which consumes the [`Transform3D`]s and scalars produced here.
//!
//! - [`triangle`]: [`RightTriangle`] solved from any two independent measurements
//! - [`derived`]: secondary lengths of the frame, [`derive_geometry`]
//! - [`distribute`]: even spacing of items along a leg
//! - [`transform`]: the apex transform chain and its planar twin
//! - [`placement`]: [`platform_placements`] plus feet and panel mounts
//! - [`outline`]: planar cross sections as `geo` geometry
//! - [`export`]: one JSON file per variant for the geometry kernel
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to place platforms in parallel

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod angle;
pub mod config;
pub mod derived;
pub mod distribute;
pub mod errors;
pub mod export;
pub mod float_types;
pub mod outline;
pub mod placement;
pub mod transform;
pub mod triangle;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use angle::Angle;
pub use config::Configuration;
pub use derived::{DerivedGeometry, derive_geometry};
pub use distribute::LinearDistribution;
pub use errors::{ExportError, GeometryError};
pub use placement::{PlatformPlacement, PlatformSlot, platform_placements};
pub use transform::{Transform2D, Transform3D};
pub use triangle::RightTriangle;
