//! Format-bound parse/serialize codec

use crate::error::Result;
use crate::format::Format;
use crate::handlers;

/// A parsed configuration: a flat mapping from key to opaque value.
///
/// Backed by an insertion-ordered map (`serde_json` with `preserve_order`)
/// so that diff output follows each source document's own key order.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Codec bound to one [`Format`], held for the duration of a run.
///
/// Binding happens once at construction; an unsupported format is rejected
/// earlier, at resolution time, so a constructed codec can always parse and
/// serialize its format.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    format: Format,
}

impl Codec {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Resolve the format for `name` and bind a codec to it.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedFormat` when the extension is not mapped.
    pub fn for_file_name(name: &str) -> Result<Self> {
        Ok(Self::new(Format::for_file_name(name)?))
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Parse `source` into a configuration mapping.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` when the text is malformed for the bound
    /// format, or when the top-level value is not a mapping.
    pub fn parse(&self, source: &str) -> Result<ConfigMap> {
        match self.format {
            Format::Toml => handlers::toml::parse(source),
            Format::Yaml => handlers::yaml::parse(source),
            Format::Json => handlers::json::parse(source),
        }
    }

    /// Serialize a configuration mapping as text in the bound format.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialize` when the mapping holds a value the bound
    /// format cannot represent (e.g. null in TOML).
    pub fn serialize(&self, config: &ConfigMap) -> Result<String> {
        match self.format {
            Format::Toml => handlers::toml::serialize(config),
            Format::Yaml => handlers::yaml::serialize(config),
            Format::Json => handlers::json::serialize(config),
        }
    }
}
