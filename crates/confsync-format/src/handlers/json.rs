//! JSON parse/serialize

use serde_json::Value;

use super::into_mapping;
use crate::codec::ConfigMap;
use crate::error::{Error, Result};
use crate::format::Format;

pub fn parse(source: &str) -> Result<ConfigMap> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| Error::parse("JSON", e.to_string()))?;
    into_mapping(value, Format::Json)
}

pub fn serialize(config: &ConfigMap) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| Error::serialize("JSON", e.to_string()))
}
