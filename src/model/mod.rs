//! The morphable face model engine.
//!
//! Loads a library of topology-consistent morph targets into per-vertex
//! displacement fields ("shape modes") and reconstructs deformed faces as
//! the neutral mesh plus a weighted sum of modes.
//!
//! # Ownership
//!
//! Loading produces an immutable [`FaceModelAsset`]. Callers wrap it in an
//! `Arc` and hand it to every [`FaceModelInstance`] they construct; the
//! asset is never mutated, so instances share it without locking while each
//! owning its weight vectors and deformed buffer exclusively.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use std::sync::Arc;
//! use facemorph::math::Point3;
//! use facemorph::mesh::{FaceMesh, MeshTopology};
//! use facemorph::model::{FaceModelInstance, ModelLoader};
//! use facemorph::store::MemoryStore;
//!
//! // A two-vertex model with one "smile" expression.
//! let topology = Arc::new(MeshTopology::empty());
//! let neutral = FaceMesh::new(vec![Point3::origin(); 2], topology);
//! let smile = neutral.with_positions(vec![Point3::new(1.0, 0.0, 0.0), Point3::origin()]);
//!
//! let store = MemoryStore::new();
//! store.insert_text("model/vertex_indices.json", r#"{"expressions": ["smile"]}"#);
//! store.insert_mesh("model/generic_neutral_mesh.obj", neutral);
//! store.insert_mesh("model/smile.obj", smile);
//!
//! let loader = ModelLoader::new(store);
//! let asset = Arc::new(loader.load(Path::new("model")).unwrap());
//!
//! let mut face = FaceModelInstance::new(asset);
//! face.set_expression(&[0.5]);
//! face.deform_mesh();
//! assert_eq!(face.deformed_positions()[0], Point3::new(0.5, 0.0, 0.0));
//! ```

mod asset;
mod error;
mod face;
mod loader;
#[cfg(test)]
pub(crate) mod tests;
mod verify;

pub use asset::{
    compute_shape_mode, FaceModelAsset, ShapeMode, ShapeModeEntry, ShapeModeKind, ShapeModeSet,
};
pub use error::ModelError;
pub use face::FaceModelInstance;
pub use loader::{identity_name, ModelLoader, CONFIG_FILE_NAME, NEUTRAL_MESH_NAME};
pub use verify::write_verification_meshes;
