use std::io;
use std::path::PathBuf;

/// Failures raised by the persistence substrate.
///
/// These are never retried or swallowed by the domain layer; they travel
/// to the caller inside `anyhow::Error` and can be recovered with
/// `downcast_ref::<StorageError>()`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to (de)serialize record '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage unavailable at {path:?}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { key: String, needed: usize, limit: usize },
}
