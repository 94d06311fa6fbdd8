//! Reconciliation engine
//!
//! One engine instance performs one run: verify the bucket, load the
//! prior configuration from the remote store (empty if absent), load the
//! desired configuration from the local source file, diff them, and
//! publish the desired state unless the run is a dry run.

use std::fs;
use std::path::Path;

use confsync_format::{Codec, ConfigMap};
use confsync_store::RemoteStore;

use crate::diff::{DiffReport, diff};
use crate::error::{Error, Result};
use crate::inputs::SyncInputs;

pub struct SyncEngine {
    inputs: SyncInputs,
    store: Box<dyn RemoteStore>,
    source_codec: Codec,
    destination_codec: Codec,
}

impl std::fmt::Debug for SyncEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncEngine")
            .field("inputs", &self.inputs)
            .field("store", &"<dyn RemoteStore>")
            .field("source_codec", &self.source_codec)
            .field("destination_codec", &self.destination_codec)
            .finish()
    }
}

impl SyncEngine {
    /// Validate inputs and resolve both codecs.
    ///
    /// The source file and destination key may use different formats, so
    /// each side gets its own codec, bound here and held for the run.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` or `Error::Format` before any file or
    /// network access has happened.
    pub fn new(inputs: SyncInputs, store: Box<dyn RemoteStore>) -> Result<Self> {
        inputs.validate()?;

        let source_codec = Codec::for_file_name(&inputs.source)?;
        let destination_codec = Codec::for_file_name(&inputs.destination)?;

        Ok(Self {
            inputs,
            store,
            source_codec,
            destination_codec,
        })
    }

    /// Execute the run and return the computed diff.
    ///
    /// Steps run in strict sequence; the first failure aborts the run.
    /// The diff is returned whether or not publishing happened.
    pub async fn run(&self) -> Result<DiffReport> {
        self.verify_bucket().await?;
        let prior = self.load_prior_config().await?;
        let desired = self.load_desired_config()?;

        let report = diff(&prior, &desired);

        if self.inputs.dry_run {
            tracing::debug!("dry run, skipping publish");
        } else {
            self.publish(&desired).await?;
        }

        Ok(report)
    }

    async fn verify_bucket(&self) -> Result<()> {
        tracing::debug!(bucket = %self.inputs.bucket, "verifying bucket");
        if !self.store.bucket_exists(&self.inputs.bucket).await? {
            return Err(Error::BucketNotFound {
                bucket: self.inputs.bucket.clone(),
            });
        }
        Ok(())
    }

    /// Load the previously published configuration, or an empty mapping
    /// when nothing has been published yet.
    async fn load_prior_config(&self) -> Result<ConfigMap> {
        let bucket = &self.inputs.bucket;
        let key = &self.inputs.destination;

        if !self.store.object_exists(bucket, key).await? {
            tracing::debug!(%key, "no prior configuration");
            return Ok(ConfigMap::new());
        }

        let bytes = self.store.get_object(bucket, key).await?;
        let text = String::from_utf8(bytes).map_err(|_| {
            confsync_format::Error::parse(
                self.destination_codec.format().name(),
                "object content is not valid UTF-8",
            )
        })?;
        Ok(self.destination_codec.parse(&text)?)
    }

    fn load_desired_config(&self) -> Result<ConfigMap> {
        let path = Path::new(&self.inputs.source);
        if !path.exists() {
            return Err(Error::SourceNotFound {
                path: self.inputs.source.clone(),
            });
        }

        let text = fs::read_to_string(path)?;
        Ok(self.source_codec.parse(&text)?)
    }

    /// Serialize the desired configuration in the destination format and
    /// fully replace the remote object.
    async fn publish(&self, desired: &ConfigMap) -> Result<()> {
        tracing::debug!(key = %self.inputs.destination, "publishing configuration");
        let body = self.destination_codec.serialize(desired)?;
        self.store
            .put_object(
                &self.inputs.bucket,
                &self.inputs.destination,
                body.into_bytes(),
            )
            .await?;
        Ok(())
    }
}
