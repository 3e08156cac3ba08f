use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::mesh::FaceMesh;

use super::{ModelStore, StoreError};

#[derive(Clone)]
enum Entry {
    Text(String),
    Mesh(FaceMesh),
}

/// In-memory model store for tests and embedded assets.
///
/// Thread-safe and mutable after construction; clones share the same
/// underlying file map. Supports both read and write operations.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use facemorph::store::{MemoryStore, ModelStore};
///
/// let store = MemoryStore::new();
/// store.insert_text("model/vertex_indices.json", r#"{"expressions": []}"#);
/// assert!(store.read_text(Path::new("model/vertex_indices.json")).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<PathBuf, Entry>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text file at the given path, overwriting any existing entry.
    pub fn insert_text(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.entries
            .write()
            .unwrap()
            .insert(path.into(), Entry::Text(text.into()));
    }

    /// Insert a mesh file at the given path, overwriting any existing entry.
    pub fn insert_mesh(&self, path: impl Into<PathBuf>, mesh: FaceMesh) {
        self.entries
            .write()
            .unwrap()
            .insert(path.into(), Entry::Mesh(mesh));
    }

    /// Remove the entry at the given path, if any.
    pub fn remove(&self, path: &Path) {
        self.entries.write().unwrap().remove(path);
    }
}

impl ModelStore for MemoryStore {
    fn read_text(&self, path: &Path) -> Result<String, StoreError> {
        let entries = self.entries.read().unwrap();
        match entries.get(path) {
            Some(Entry::Text(text)) => Ok(text.clone()),
            Some(Entry::Mesh(_)) => Err(StoreError::Malformed(format!(
                "{} is a mesh, not a text file",
                path.display()
            ))),
            None => Err(StoreError::NotFound(path.display().to_string())),
        }
    }

    fn read_mesh(&self, path: &Path) -> Result<FaceMesh, StoreError> {
        let entries = self.entries.read().unwrap();
        match entries.get(path) {
            Some(Entry::Mesh(mesh)) => Ok(mesh.clone()),
            Some(Entry::Text(_)) => Err(StoreError::Malformed(format!(
                "{} is a text file, not a mesh",
                path.display()
            ))),
            None => Err(StoreError::NotFound(path.display().to_string())),
        }
    }

    fn mesh_exists(&self, path: &Path) -> bool {
        matches!(
            self.entries.read().unwrap().get(path),
            Some(Entry::Mesh(_))
        )
    }

    fn write_mesh(&self, path: &Path, mesh: &FaceMesh) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap()
            .insert(path.to_path_buf(), Entry::Mesh(mesh.clone()));
        Ok(())
    }
}
