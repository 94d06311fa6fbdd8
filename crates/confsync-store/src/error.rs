//! Error types for confsync-store

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur against the remote store.
///
/// A confirmed "not found" on the existence checks is not an error; it is
/// reported as `false` by the trait methods. Everything else surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Network or transport failure (connect, TLS, timeout, body read)
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The backend answered with a non-success status
    #[error("remote store returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A request could not be constructed for the given addressing
    #[error("invalid store request: {message}")]
    Request { message: String },
}

impl StoreError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
}
