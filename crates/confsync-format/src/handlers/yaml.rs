//! YAML parse/serialize using serde_yaml

use serde_json::Value;
use serde_yaml::Value as YamlValue;

use super::into_mapping;
use crate::codec::ConfigMap;
use crate::error::{Error, Result};
use crate::format::Format;

pub fn parse(source: &str) -> Result<ConfigMap> {
    let value: YamlValue =
        serde_yaml::from_str(source).map_err(|e| Error::parse("YAML", e.to_string()))?;
    into_mapping(yaml_to_json(value)?, Format::Yaml)
}

pub fn serialize(config: &ConfigMap) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| Error::serialize("YAML", e.to_string()))
}

/// Convert a YAML value tree to JSON values, preserving mapping order.
///
/// Mapping keys must be strings; YAML permits arbitrary keys but the
/// configuration data model does not.
fn yaml_to_json(value: YamlValue) -> Result<Value> {
    match value {
        YamlValue::Null => Ok(Value::Null),
        YamlValue::Bool(b) => Ok(Value::Bool(b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                Ok(serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null))
            } else {
                Ok(Value::Null)
            }
        }
        YamlValue::String(s) => Ok(Value::String(s)),
        YamlValue::Sequence(seq) => {
            let items = seq
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }
        YamlValue::Mapping(mapping) => {
            let mut map = serde_json::Map::new();
            for (key, value) in mapping {
                let YamlValue::String(key) = key else {
                    return Err(Error::parse("YAML", "mapping keys must be strings"));
                };
                map.insert(key, yaml_to_json(value)?);
            }
            Ok(Value::Object(map))
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_mapping() {
        let config = parse("name: app\nreplicas: 3\nenabled: true\n").unwrap();
        assert_eq!(config.get("name"), Some(&json!("app")));
        assert_eq!(config.get("replicas"), Some(&json!(3)));
        assert_eq!(config.get("enabled"), Some(&json!(true)));
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let config = parse("zebra: 1\napple: 2\nmango: 3\n").unwrap();
        let keys: Vec<_> = config.keys().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_nested_values() {
        let config = parse("database:\n  host: localhost\n  port: 5432\n").unwrap();
        assert_eq!(
            config.get("database"),
            Some(&json!({"host": "localhost", "port": 5432}))
        );
    }

    #[test]
    fn test_parse_malformed_fails() {
        assert!(parse("key: [unclosed\n  broken: {").is_err());
    }

    #[test]
    fn test_parse_scalar_top_level_fails() {
        assert!(parse("just a string\n").is_err());
    }

    #[test]
    fn test_parse_non_string_key_fails() {
        let err = parse("1: numeric key\n").unwrap_err();
        assert!(err.to_string().contains("keys must be strings"));
    }

    #[test]
    fn test_serialize_round() {
        let config = parse("name: app\nlimits:\n  cpu: 2\n  memory: 512\n").unwrap();
        let text = serialize(&config).unwrap();
        assert_eq!(parse(&text).unwrap(), config);
    }
}
