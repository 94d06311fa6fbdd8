//! Remote object store capability for confsync
//!
//! Defines the [`RemoteStore`] trait the reconciliation engine depends on,
//! an S3 transport implementation with SigV4 request signing, and an
//! in-memory store for tests.

pub mod error;
pub mod memory;
pub mod s3;
mod sigv4;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, StoreOp};
pub use s3::{S3Config, S3Store};
pub use store::RemoteStore;
