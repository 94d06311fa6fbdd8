//! Error types for confsync-core

/// Result type for confsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a reconciliation run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input field is empty; checked before any I/O
    #[error("Input '{field}' is empty")]
    EmptyInput { field: &'static str },

    /// The remote bucket does not exist (distinct from a store failure)
    #[error("Bucket '{bucket}' does not exist")]
    BucketNotFound { bucket: String },

    /// The local desired-state file does not exist
    #[error("Source file '{path}' does not exist")]
    SourceNotFound { path: String },

    /// Format resolution, parse, or serialize failure
    #[error(transparent)]
    Format(#[from] confsync_format::Error),

    /// Remote store failure other than a confirmed not-found
    #[error(transparent)]
    Store(#[from] confsync_store::StoreError),

    /// Local file read failure other than absence
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
