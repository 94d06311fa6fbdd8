//! TOML parse/serialize

use serde_json::Value;
use toml::Value as TomlValue;

use crate::codec::ConfigMap;
use crate::error::{Error, Result};

pub fn parse(source: &str) -> Result<ConfigMap> {
    let table: toml::Table = source
        .parse()
        .map_err(|e: toml::de::Error| Error::parse("TOML", e.to_string()))?;

    let mut map = ConfigMap::new();
    for (key, value) in table {
        map.insert(key, toml_to_json(value));
    }
    Ok(map)
}

pub fn serialize(config: &ConfigMap) -> Result<String> {
    let mut table = toml::Table::new();
    for (key, value) in config {
        table.insert(key.clone(), json_to_toml(value)?);
    }
    toml::to_string(&table).map_err(|e| Error::serialize("TOML", e.to_string()))
}

/// Convert a TOML value tree to JSON values, preserving table order.
fn toml_to_json(value: TomlValue) -> Value {
    match value {
        TomlValue::String(s) => Value::String(s),
        TomlValue::Integer(i) => Value::Number(i.into()),
        TomlValue::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        TomlValue::Boolean(b) => Value::Bool(b),
        // Datetimes have no JSON counterpart; carry them as their TOML text
        TomlValue::Datetime(dt) => Value::String(dt.to_string()),
        TomlValue::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        TomlValue::Table(table) => {
            let mut map = serde_json::Map::new();
            for (key, value) in table {
                map.insert(key, toml_to_json(value));
            }
            Value::Object(map)
        }
    }
}

fn json_to_toml(value: &Value) -> Result<TomlValue> {
    match value {
        Value::Null => Err(Error::serialize(
            "TOML",
            "null values cannot be represented",
        )),
        Value::Bool(b) => Ok(TomlValue::Boolean(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(TomlValue::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(TomlValue::Float(f))
            } else {
                Err(Error::serialize("TOML", format!("unrepresentable number {n}")))
            }
        }
        Value::String(s) => Ok(TomlValue::String(s.clone())),
        Value::Array(arr) => {
            let items = arr
                .iter()
                .map(json_to_toml)
                .collect::<Result<Vec<_>>>()?;
            Ok(TomlValue::Array(items))
        }
        Value::Object(map) => {
            let mut table = toml::Table::new();
            for (key, value) in map {
                table.insert(key.clone(), json_to_toml(value)?);
            }
            Ok(TomlValue::Table(table))
        }
    }
}
