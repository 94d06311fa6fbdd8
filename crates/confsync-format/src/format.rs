//! Format identifiers and file-name resolution

use crate::error::{Error, Result};

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" | "ejson" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolve the format for a file name or object key.
    ///
    /// Uses the substring after the last `.`; a name without a `.` is
    /// treated as being all extension, so `config` fails with the whole
    /// name reported as unsupported.
    pub fn for_file_name(name: &str) -> Result<Self> {
        let ext = match name.rfind('.') {
            Some(idx) => &name[idx + 1..],
            None => name,
        };
        Self::from_extension(ext).ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }

    /// Display name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}
