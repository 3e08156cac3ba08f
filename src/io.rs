//! Coefficient-document and mesh-export boundary.
//!
//! A coefficient document is a JSON file with two numeric-array fields,
//! `identity_coefficients` and `expression_coefficients`. This module reads
//! and writes those documents and delegates mesh export to the
//! [`ModelStore`] collaborator; no geometry processing happens here.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::math::Real;
use crate::mesh::FaceMesh;
use crate::model::{FaceModelAsset, FaceModelInstance, ModelError};
use crate::store::{ModelStore, StoreError};

/// A face parameterization: identity and expression weight vectors.
///
/// Serializes with the wire field names `identity_coefficients` and
/// `expression_coefficients`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceCoefficients {
    /// Identity weights, one per identity shape mode.
    #[serde(rename = "identity_coefficients")]
    pub identity: Vec<Real>,
    /// Expression weights, one per expression shape mode.
    #[serde(rename = "expression_coefficients")]
    pub expression: Vec<Real>,
}

/// Parse a coefficient document.
///
/// # Errors
///
/// [`ModelError::MalformedInput`] if either field is absent or not a
/// numeric array.
pub fn parse_coefficients(text: &str) -> Result<FaceCoefficients, ModelError> {
    serde_json::from_str(text).map_err(|err| ModelError::MalformedInput(err.to_string()))
}

/// Read a coefficient document from a file.
pub fn read_coefficients(path: &Path) -> Result<FaceCoefficients, ModelError> {
    let text = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ModelError::AssetNotFound(path.display().to_string())
        } else {
            ModelError::Store(StoreError::Io(err))
        }
    })?;
    parse_coefficients(&text)
}

/// Write a coefficient document to a file.
pub fn write_coefficients(path: &Path, coefficients: &FaceCoefficients) -> Result<(), ModelError> {
    let text = serde_json::to_string_pretty(coefficients)
        .map_err(|err| ModelError::MalformedInput(err.to_string()))?;
    std::fs::write(path, text).map_err(|err| ModelError::Store(StoreError::Io(err)))
}

/// Read a coefficient document and construct an instance from it.
///
/// The weights are applied with the usual head-slice truncation against the
/// asset's mode counts. The instance is not deformed; call
/// [`FaceModelInstance::deform_mesh`] when the mesh is needed.
pub fn read_face_model(
    path: &Path,
    asset: Arc<FaceModelAsset>,
) -> Result<FaceModelInstance, ModelError> {
    let coefficients = read_coefficients(path)?;
    Ok(FaceModelInstance::with_weights(
        asset,
        &coefficients.identity,
        &coefficients.expression,
    ))
}

/// Write a mesh through the store. No transformation is performed.
pub fn write_mesh<S: ModelStore>(store: &S, path: &Path, mesh: &FaceMesh) -> Result<(), ModelError> {
    store.write_mesh(path, mesh).map_err(ModelError::Store)
}

/// Write an instance's current deformed mesh through the store.
///
/// Exports whatever the last [`FaceModelInstance::deform_mesh`] produced;
/// weights set since then are not reflected until the next deform.
pub fn write_deformed_mesh<S: ModelStore>(
    store: &S,
    path: &Path,
    face: &FaceModelInstance,
) -> Result<(), ModelError> {
    write_mesh(store, path, &face.deformed_mesh())
}
