//! Configuration format handling for confsync
//!
//! Resolves file names to a supported format and provides parse/serialize
//! codecs over a single order-preserving mapping representation.

pub mod codec;
pub mod error;
pub mod format;
pub mod handlers;

pub use codec::{Codec, ConfigMap};
pub use error::{Error, Result};
pub use format::Format;
