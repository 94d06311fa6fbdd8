//! Per-format parse and serialize implementations

pub mod json;
pub mod toml;
pub mod yaml;

use serde_json::Value;

use crate::codec::ConfigMap;
use crate::error::{Error, Result};
use crate::format::Format;

/// Require the parsed top-level value to be a mapping.
///
/// The data model is a flat key/value configuration; a document whose root
/// is a scalar or sequence has no keys to reconcile.
pub(crate) fn into_mapping(value: Value, format: Format) -> Result<ConfigMap> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::parse(
            format.name(),
            format!("top-level value must be a mapping, got {}", kind_of(&other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
