//! Error types for confsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the reconciliation engine
    #[error(transparent)]
    Core(#[from] confsync_core::Error),

    /// JSON rendering error for --json output
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
