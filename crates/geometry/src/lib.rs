//! 2D shape primitives with pairwise intersection and containment queries
//!
//! Every shape is a variant of [`shapes::Shape`]; vectors are
//! `nalgebra::Vector2<f64>` via [`vector::Vector2D`]. Rendering goes through
//! the [`draw::Surface`] seam so the crate never depends on a graphics
//! backend.

pub mod color;
pub mod curve;
pub mod draw;
pub mod intersection;
pub mod segment;
pub mod shapes;
pub mod vector;

#[cfg(test)]
mod intersection_test;

pub use color::Color;
pub use shapes::{Shape, ShapeKind};
pub use vector::{Vector2D, VectorExt, EPSILON};
