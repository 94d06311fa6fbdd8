//! RemoteStore capability trait

use async_trait::async_trait;

use crate::error::Result;

/// Contract for a named-bucket, keyed-object remote store.
///
/// Implementations must be object-safe so callers can hold a
/// `Box<dyn RemoteStore>` without knowing the concrete transport, and
/// `Send + Sync` so a store can cross async task boundaries.
///
/// The two existence checks translate a confirmed "not found" from the
/// backend into `Ok(false)`; any other backend failure propagates as
/// [`StoreError`](crate::StoreError). `get_object` and `put_object` never
/// translate: an object deleted between an existence check and the read
/// surfaces as an error, not a boolean.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Whether the bucket exists and is reachable.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Whether the object at `key` exists in `bucket`.
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool>;

    /// Retrieve the raw bytes of the object at `key`.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// Create or fully replace the object at `key`. No partial writes.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}
