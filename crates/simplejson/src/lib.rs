//! # SimpleJSON
//!
//! An in-memory JSON value tree with value semantics.
//!
//! A [`Json`] handle owns exactly one node. Copying a handle deep-clones the
//! whole subtree, indexing a handle auto-vivifies missing keys and slots, and
//! equality is structural (with two deliberate exceptions, see [`Json`]).
//!
//! ## Architecture
//!
//! - **Node hierarchy**: a closed enum over null, boolean, number, string,
//!   object and array nodes
//! - **Handle**: [`Json`], the only type applications touch
//! - **Shared leaves**: null, `true` and `false` are immortal statics shared by
//!   every handle holding them
//! - **Reclaimer**: released nodes are freed in batches, see [`reclaim`]
//!
//! Parsing JSON text and serializing it back are out of scope. With the
//! `serde_json` feature, [`Json`] converts to and from `serde_json::Value`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
#[cfg(feature = "serde_json")]
mod convert;
pub mod error;
pub mod reclaim;
pub mod value;

// Re-export main types
pub use config::ReclaimConfig;
pub use error::{JsonError, Result};
pub use reclaim::ReclaimStats;
pub use value::{Array, Json, JsonType, Number, Object};

/// SimpleJSON version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
