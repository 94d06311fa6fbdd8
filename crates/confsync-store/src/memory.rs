//! In-memory RemoteStore for tests
//!
//! Keeps buckets and objects in process so engine and integration tests
//! run without a network. Clones share state, so a test can hold one
//! handle for assertions after moving another into the engine.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::store::RemoteStore;

/// Store operations that can be made to fail via [`MemoryStore::fail_next`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    BucketExists,
    ObjectExists,
    Get,
    Put,
}

#[derive(Default)]
struct Inner {
    buckets: HashMap<String, HashMap<String, Vec<u8>>>,
    calls: Vec<String>,
    fail_next: Option<StoreOp>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket(bucket: &str) -> Self {
        let store = Self::new();
        store.create_bucket(bucket);
        store
    }

    pub fn create_bucket(&self, bucket: &str) {
        self.lock().buckets.entry(bucket.to_string()).or_default();
    }

    pub fn insert_object(&self, bucket: &str, key: &str, body: impl Into<Vec<u8>>) {
        self.lock()
            .buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), body.into());
    }

    /// Stored bytes for an object, if present
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.lock()
            .buckets
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .cloned()
    }

    /// Ordered operation log, e.g. `"put_object deploys/app.json"`
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn put_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.starts_with("put_object"))
            .count()
    }

    /// Make the next invocation of `op` fail with a transport error
    pub fn fail_next(&self, op: StoreOp) {
        self.lock().fail_next = Some(op);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory store mutex poisoned")
    }

    fn record(&self, op: StoreOp, call: String) -> Result<()> {
        let mut inner = self.lock();
        inner.calls.push(call);
        if inner.fail_next == Some(op) {
            inner.fail_next = None;
            return Err(StoreError::transport("injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        self.record(StoreOp::BucketExists, format!("bucket_exists {bucket}"))?;
        Ok(self.lock().buckets.contains_key(bucket))
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool> {
        self.record(StoreOp::ObjectExists, format!("object_exists {bucket}/{key}"))?;
        Ok(self
            .lock()
            .buckets
            .get(bucket)
            .is_some_and(|objects| objects.contains_key(key)))
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.record(StoreOp::Get, format!("get_object {bucket}/{key}"))?;
        self.lock()
            .buckets
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .cloned()
            .ok_or_else(|| StoreError::Api {
                status: 404,
                message: format!("no such object {bucket}/{key}"),
            })
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.record(StoreOp::Put, format!("put_object {bucket}/{key}"))?;
        let mut inner = self.lock();
        match inner.buckets.get_mut(bucket) {
            Some(objects) => {
                objects.insert(key.to_string(), body);
                Ok(())
            }
            None => Err(StoreError::Api {
                status: 404,
                message: format!("no such bucket {bucket}"),
            }),
        }
    }
}
