//! Math type aliases.
//!
//! Geometry processing runs in `f64` end to end; morph-target deltas are
//! small differences of absolute positions and the extra precision keeps
//! reconstruction exact.

pub use nalgebra;

/// Scalar type for positions, displacements, and weights.
pub type Real = f64;

/// 3D displacement vector.
pub type Vec3 = nalgebra::Vector3<Real>;

/// 3D vertex position.
pub type Point3 = nalgebra::Point3<Real>;
