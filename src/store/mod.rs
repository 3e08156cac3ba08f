//! Storage backends for model assets.
//!
//! Mesh file parsing and writing are not part of this crate. The
//! [`ModelStore`] trait is the seam where a concrete mesh format plugs in:
//! the loader asks the store for meshes and configuration text by path, and
//! the export helpers hand meshes back to it. Implement the trait over your
//! mesh codec of choice to work with models on disk; [`MemoryStore`] serves
//! tests and embedded assets.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use std::path::Path;

use crate::mesh::FaceMesh;

/// Trait for model asset storage backends.
///
/// All operations are synchronous: model loading is a sequential batch of
/// blocking reads, one per asset file.
///
/// # Read vs Write
///
/// Backends must implement the read operations (`read_text`, `read_mesh`,
/// `mesh_exists`). `write_mesh` has a default implementation returning
/// [`StoreError::ReadOnly`]; backends that can persist meshes override it.
///
/// # Mesh format
///
/// The mesh format is the backend's concern.
/// [`mesh_extension`](ModelStore::mesh_extension) reports the file extension
/// of the format it speaks, and the loader composes morph-target filenames
/// from it.
pub trait ModelStore: Send + Sync {
    /// Read the entire contents of a text file at the given path.
    fn read_text(&self, path: &Path) -> Result<String, StoreError>;

    /// Load a mesh from a file at the given path.
    fn read_mesh(&self, path: &Path) -> Result<FaceMesh, StoreError>;

    /// Check whether a mesh file exists at the given path.
    fn mesh_exists(&self, path: &Path) -> bool;

    /// Write a mesh to a file at the given path, creating or overwriting it.
    fn write_mesh(&self, _path: &Path, _mesh: &FaceMesh) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly)
    }

    /// File extension (without the dot) of the mesh format this store speaks.
    ///
    /// Defaults to `"obj"`, the conventional interchange format for
    /// morph-target libraries.
    fn mesh_extension(&self) -> &str {
        "obj"
    }
}

impl<S: ModelStore + ?Sized> ModelStore for &S {
    fn read_text(&self, path: &Path) -> Result<String, StoreError> {
        (**self).read_text(path)
    }

    fn read_mesh(&self, path: &Path) -> Result<FaceMesh, StoreError> {
        (**self).read_mesh(path)
    }

    fn mesh_exists(&self, path: &Path) -> bool {
        (**self).mesh_exists(path)
    }

    fn write_mesh(&self, path: &Path, mesh: &FaceMesh) -> Result<(), StoreError> {
        (**self).write_mesh(path, mesh)
    }

    fn mesh_extension(&self) -> &str {
        (**self).mesh_extension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshTopology;
    use std::sync::Arc;

    /// Minimal read-only store exercising the trait defaults.
    struct NullStore;

    impl ModelStore for NullStore {
        fn read_text(&self, path: &Path) -> Result<String, StoreError> {
            Err(StoreError::NotFound(path.display().to_string()))
        }

        fn read_mesh(&self, path: &Path) -> Result<FaceMesh, StoreError> {
            Err(StoreError::NotFound(path.display().to_string()))
        }

        fn mesh_exists(&self, _path: &Path) -> bool {
            false
        }
    }

    #[test]
    fn test_write_defaults_to_read_only() {
        let mesh = FaceMesh::new(Vec::new(), Arc::new(MeshTopology::empty()));
        let result = NullStore.write_mesh(Path::new("out.obj"), &mesh);
        assert!(matches!(result, Err(StoreError::ReadOnly)));
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(NullStore.mesh_extension(), "obj");
    }
}
