//! Error types for model loading and coefficient I/O.

use crate::store::StoreError;

/// Errors that can occur while loading or using a face model.
///
/// All loading errors are fatal: the loader never returns a partially
/// constructed asset.
#[derive(Debug)]
pub enum ModelError {
    /// A required model asset (neutral mesh, configuration, a listed
    /// expression, a coefficient file) is missing.
    AssetNotFound(String),
    /// A morph target's vertex count differs from the neutral mesh's.
    TopologyMismatch {
        /// Name of the offending morph target.
        name: String,
        /// Vertex count of the neutral mesh.
        expected: usize,
        /// Vertex count of the morph target.
        actual: usize,
    },
    /// The model configuration document is missing expected fields or
    /// cannot be parsed.
    MalformedConfig(String),
    /// A coefficient document is missing expected fields or cannot be
    /// parsed.
    MalformedInput(String),
    /// An underlying store operation failed.
    Store(StoreError),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetNotFound(name) => write!(f, "model asset not found: {name}"),
            Self::TopologyMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "morph target {name} has {actual} vertices, expected {expected}"
            ),
            Self::MalformedConfig(msg) => write!(f, "malformed model configuration: {msg}"),
            Self::MalformedInput(msg) => write!(f, "malformed coefficient document: {msg}"),
            Self::Store(err) => write!(f, "store error: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ModelError {
    fn from(err: StoreError) -> Self {
        // A missing file surfaces as the domain error; everything else is
        // passed through.
        match err {
            StoreError::NotFound(path) => Self::AssetNotFound(path),
            other => Self::Store(other),
        }
    }
}
