use std::fmt;

/// Errors that can occur in a model storage backend.
#[derive(Debug)]
pub enum StoreError {
    /// The requested path was not found in the store.
    NotFound(String),
    /// An IO error occurred while accessing the store.
    Io(std::io::Error),
    /// The file exists but its contents could not be understood.
    Malformed(String),
    /// The store does not support write operations.
    ReadOnly,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(path) => write!(f, "not found: {path}"),
            StoreError::Io(err) => write!(f, "IO error: {err}"),
            StoreError::Malformed(reason) => write!(f, "malformed file: {reason}"),
            StoreError::ReadOnly => write!(f, "store is read-only"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound(err.to_string())
        } else {
            StoreError::Io(err)
        }
    }
}
