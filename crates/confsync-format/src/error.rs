//! Error types for confsync-format

/// Result type for confsync-format operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in format operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    Parse { format: String, message: String },

    #[error("Failed to serialize {format} content: {message}")]
    Serialize { format: String, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn serialize(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialize {
            format: format.into(),
            message: message.into(),
        }
    }
}
