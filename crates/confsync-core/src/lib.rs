//! Core reconciliation layer for confsync
//!
//! Validates run inputs, loads the prior (remote) and desired (local)
//! configurations, computes their difference, and conditionally publishes
//! the desired state back to the remote store.

pub mod diff;
pub mod engine;
pub mod error;
pub mod inputs;

pub use diff::{ChangedEntry, DiffReport, UpdatedEntry, diff};
pub use engine::SyncEngine;
pub use error::{Error, Result};
pub use inputs::SyncInputs;
