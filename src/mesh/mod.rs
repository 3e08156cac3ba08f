//! CPU-side face mesh data.
//!
//! This module provides:
//! - [`FaceMesh`] - an ordered vertex position buffer plus shared topology
//! - [`MeshTopology`] - opaque face/vertex connectivity, carried through
//!   deformation untouched
//!
//! The vertex order of a [`FaceMesh`] is the dimensional contract of the
//! whole model: every morph target and every shape mode indexes vertices
//! the same way the neutral mesh does.

mod data;

pub use data::{FaceMesh, MeshTopology};
