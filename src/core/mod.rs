//! Core types for cidfmt
//!
//! This module contains the identifier value types, the multihash codec,
//! and the error type shared by every other module.

pub mod error;
pub mod multihash;
pub mod types;

// Re-export commonly used items
pub use error::{CidError, EncodingKind, Result};
pub use multihash::Multihash;
pub use types::{Cid, Prefix, Version, DAG_PB};
