//! Run inputs and validation

use crate::error::{Error, Result};

/// Inputs for one reconciliation run.
///
/// Every field except `region` and `dry_run` is mandatory and must be
/// non-empty; validation happens before any file or network access.
#[derive(Debug, Clone)]
pub struct SyncInputs {
    /// Remote bucket holding the published configuration
    pub bucket: String,
    /// Local path of the desired-state configuration file
    pub source: String,
    /// Object key the configuration is published under
    pub destination: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    /// Compute and report the diff without publishing
    pub dry_run: bool,
}

impl Default for SyncInputs {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            source: String::new(),
            destination: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            region: "us-east-1".to_string(),
            dry_run: false,
        }
    }
}

impl SyncInputs {
    /// Check every required field, failing on the first empty one.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let required: [(&'static str, &str); 5] = [
            ("bucket", &self.bucket),
            ("source", &self.source),
            ("destination", &self.destination),
            ("access_key", &self.access_key),
            ("secret_key", &self.secret_key),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::EmptyInput { field });
            }
        }
        Ok(())
    }
}
