//! Configuration diff types and computation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use confsync_format::ConfigMap;

/// A key added to or removed from the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangedEntry {
    pub key: String,
    pub value: Value,
}

/// A key present in both configurations with a changed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedEntry {
    pub key: String,
    pub old_value: Value,
    pub new_value: Value,
}

/// Result of comparing the prior and desired configurations.
///
/// `added` and `updated` follow the desired configuration's key order,
/// `removed` follows the prior configuration's; there is no ordering
/// across the three lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    pub added: Vec<ChangedEntry>,
    pub removed: Vec<ChangedEntry>,
    pub updated: Vec<UpdatedEntry>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

/// Compute the difference between two configurations.
///
/// Two passes: the desired config's keys in order (absent from prior →
/// added; present with an unequal value → updated), then the prior
/// config's keys in order (absent from desired → removed). Unchanged keys
/// never appear. Pure; no I/O.
pub fn diff(old: &ConfigMap, new: &ConfigMap) -> DiffReport {
    let mut report = DiffReport::default();

    for (key, new_value) in new {
        match old.get(key) {
            None => report.added.push(ChangedEntry {
                key: key.clone(),
                value: new_value.clone(),
            }),
            Some(old_value) if !strictly_equal(old_value, new_value) => {
                report.updated.push(UpdatedEntry {
                    key: key.clone(),
                    old_value: old_value.clone(),
                    new_value: new_value.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for (key, old_value) in old {
        if !new.contains_key(key) {
            report.removed.push(ChangedEntry {
                key: key.clone(),
                value: old_value.clone(),
            });
        }
    }

    report
}

/// Strict value equality, deliberately coarse: scalars compare by value,
/// while a composite (mapping or sequence) on either side never compares
/// equal, even to a structurally identical one. Downstream consumers rely
/// on this over-eager change detection; do not deepen it.
fn strictly_equal(old: &Value, new: &Value) -> bool {
    match (old, new) {
        (Value::Object(_), _) | (_, Value::Object(_)) => false,
        (Value::Array(_), _) | (_, Value::Array(_)) => false,
        _ => old == new,
    }
}
