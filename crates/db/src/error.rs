use std::path::PathBuf;

/// Failures of the persisted dataset document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document exists but is not a valid dataset.
    #[error("Malformed dataset in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The in-memory dataset could not be encoded.
    #[error("Failed to encode dataset: {0}")]
    Serialize(#[source] serde_json::Error),
}
