//! Directory model loading.
//!
//! A model directory contains:
//!
//! - `vertex_indices.json`: configuration; its `expressions` array lists
//!   the expression morph targets in weight order.
//! - `generic_neutral_mesh.<ext>`: the neutral mesh.
//! - one `<name>.<ext>` per listed expression.
//! - a contiguous run `identity000.<ext>`, `identity001.<ext>`, … of
//!   identity morph targets.
//!
//! `<ext>` is whatever [`ModelStore::mesh_extension`] reports.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::mesh::FaceMesh;
use crate::store::ModelStore;

use super::asset::{compute_shape_mode, FaceModelAsset, ShapeModeSet};
use super::error::ModelError;

/// Fixed name of the configuration document inside a model directory.
pub const CONFIG_FILE_NAME: &str = "vertex_indices.json";

/// Filename stem of the neutral mesh inside a model directory.
pub const NEUTRAL_MESH_NAME: &str = "generic_neutral_mesh";

/// Name of the identity morph target with the given index.
///
/// Identity files use a zero-padded numeric suffix starting at 0:
/// `identity000`, `identity001`, …
pub fn identity_name(index: usize) -> String {
    format!("identity{index:03}")
}

/// The model configuration document.
///
/// Only the expression list is consumed; other fields (e.g. named
/// vertex-index regions) are ignored.
#[derive(Debug, Deserialize)]
struct ModelConfig {
    expressions: Vec<String>,
}

/// Loads face models from a directory through a [`ModelStore`].
///
/// Loading is a sequential batch of blocking reads in a fixed order:
/// configuration, neutral mesh, expressions (in configuration order),
/// identities (ascending from 0). Any failure aborts the whole load; a
/// partially constructed asset is never returned.
///
/// # Example
///
/// ```ignore
/// let loader = ModelLoader::new(store);
/// let asset = Arc::new(loader.load(Path::new("assets/face_model"))?);
/// ```
pub struct ModelLoader<S> {
    store: S,
}

impl<S: ModelStore> ModelLoader<S> {
    /// Create a loader over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the face model in `dir`.
    pub fn load(&self, dir: &Path) -> Result<FaceModelAsset, ModelError> {
        info!("loading face model from {}", dir.display());

        let config = self.read_config(dir)?;
        let neutral = self.read_neutral_mesh(dir)?;
        let expressions = self.read_expressions(dir, &neutral, &config.expressions)?;
        let identities = self.read_identities(dir, &neutral)?;

        info!(
            "loaded face model: {} vertices, {} identities, {} expressions",
            neutral.vertex_count(),
            identities.len(),
            expressions.len()
        );
        Ok(FaceModelAsset::new(neutral, identities, expressions))
    }

    /// Path of the morph target `name` inside `dir`.
    fn mesh_path(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.{}", self.store.mesh_extension()))
    }

    fn read_config(&self, dir: &Path) -> Result<ModelConfig, ModelError> {
        let text = self.store.read_text(&dir.join(CONFIG_FILE_NAME))?;
        serde_json::from_str(&text).map_err(|err| ModelError::MalformedConfig(err.to_string()))
    }

    fn read_neutral_mesh(&self, dir: &Path) -> Result<FaceMesh, ModelError> {
        let path = self.mesh_path(dir, NEUTRAL_MESH_NAME);
        Ok(self.store.read_mesh(&path)?)
    }

    /// Load the listed expressions in configuration order.
    ///
    /// Every listed expression must be present: the configuration is an
    /// explicit contract the directory has to satisfy.
    fn read_expressions(
        &self,
        dir: &Path,
        neutral: &FaceMesh,
        names: &[String],
    ) -> Result<ShapeModeSet, ModelError> {
        let mut set = ShapeModeSet::new();
        for name in names {
            debug!("reading expression morph target: {name}");
            let mesh = self.store.read_mesh(&self.mesh_path(dir, name))?;
            let mode = compute_shape_mode(neutral, name, &mesh)?;
            set.push(name.clone(), mode);
        }
        Ok(set)
    }

    /// Scan identity morph targets in ascending, contiguous index order.
    ///
    /// The first missing index ends the scan: an expected termination
    /// condition, not an error, probed with an explicit existence check.
    /// Files after a gap are never reached. A file that exists but fails
    /// to load is a genuine error and aborts the load.
    fn read_identities(&self, dir: &Path, neutral: &FaceMesh) -> Result<ShapeModeSet, ModelError> {
        let mut set = ShapeModeSet::new();
        for index in 0.. {
            let name = identity_name(index);
            let path = self.mesh_path(dir, &name);
            if !self.store.mesh_exists(&path) {
                break;
            }
            debug!("reading identity morph target: {name}");
            let mesh = self.store.read_mesh(&path)?;
            let mode = compute_shape_mode(neutral, &name, &mesh)?;
            set.push(name, mode);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_name_padding() {
        assert_eq!(identity_name(0), "identity000");
        assert_eq!(identity_name(7), "identity007");
        assert_eq!(identity_name(42), "identity042");
        assert_eq!(identity_name(123), "identity123");
        assert_eq!(identity_name(1000), "identity1000");
    }
}
