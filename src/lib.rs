//! # facemorph
//!
//! A morphable face model engine. A face is parameterized as a neutral base
//! mesh plus a linear combination of precomputed *shape modes*: per-vertex
//! displacement fields derived from hand-sculpted identity and expression
//! morph targets that share the neutral mesh's topology.
//!
//! The crate is organized around three pieces:
//!
//! - [`model::ModelLoader`] reads a model directory (neutral mesh,
//!   configuration, morph targets) through a [`store::ModelStore`] and builds
//!   an immutable [`model::FaceModelAsset`].
//! - [`model::FaceModelInstance`] is a lightweight posable face referencing a
//!   shared asset; it holds identity/expression weight vectors and a deformed
//!   vertex buffer.
//! - [`io`] is the coefficient-document boundary (reading and writing weight
//!   vectors, exporting deformed meshes).
//!
//! Mesh file parsing and writing are deliberately not part of this crate:
//! the [`store::ModelStore`] trait is the seam where a concrete mesh format
//! plugs in. [`store::MemoryStore`] ships for tests and embedded assets.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use std::sync::Arc;
//! use facemorph::model::{FaceModelInstance, ModelLoader};
//!
//! let loader = ModelLoader::new(my_mesh_store);
//! let asset = Arc::new(loader.load(Path::new("assets/face_model"))?);
//!
//! let mut face = FaceModelInstance::new(asset);
//! face.randomize_identity();
//! face.deform_mesh();
//! facemorph::io::write_deformed_mesh(loader.store(), Path::new("out/random.obj"), &face)?;
//! ```

pub mod io;
pub mod math;
pub mod mesh;
pub mod model;
pub mod store;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
