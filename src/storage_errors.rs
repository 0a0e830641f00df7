//! # Storage Error Types Module
//!
//! Error types for the key-value store that persists the grocery list.

/// Errors raised while reading or writing stored values
#[derive(Debug)]
pub enum StorageError {
    /// Filesystem errors
    Io(std::io::Error),
    /// Stored value could not be encoded or decoded
    Serialization(serde_json::Error),
    /// Keys must be non-empty and made of ASCII letters, digits, '-' or '_'
    InvalidKey(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "Storage I/O error: {err}"),
            StorageError::Serialization(err) => write!(f, "Serialization error: {err}"),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: '{key}'"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(err) => Some(err),
            StorageError::Serialization(err) => Some(err),
            StorageError::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err)
    }
}

impl From<tempfile::PersistError> for StorageError {
    fn from(err: tempfile::PersistError) -> Self {
        StorageError::Io(err.error)
    }
}
