//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the snapshot slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read the storage file
    #[error("Failed to read storage file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the storage file
    #[error("Failed to write storage file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the storage directory
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The storage file does not hold a key-value object
    #[error("Storage file {path} is corrupted: {message}")]
    Corrupted { path: PathBuf, message: String },

    /// Failed to encode a snapshot
    #[error("Failed to encode snapshot: {0}")]
    EncodeFailed(String),

    /// Failed to decode a snapshot
    #[error("Failed to decode snapshot: {0}")]
    DecodeFailed(String),

    /// Snapshot names a question type this build does not know
    #[error("Unknown question type in snapshot: {0}")]
    UnknownQuestionType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::DecodeFailed("expected value".to_string());
        assert!(error.to_string().contains("decode snapshot"));
        assert!(error.to_string().contains("expected value"));

        let error = StorageError::UnknownQuestionType("Ranking".to_string());
        assert!(error.to_string().contains("Ranking"));

        let error = StorageError::Corrupted {
            path: PathBuf::from("/data/storage.json"),
            message: "not an object".to_string(),
        };
        assert!(error.to_string().contains("/data/storage.json"));
    }
}
