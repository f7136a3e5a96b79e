//! Engine configuration
//!
//! Optional TOML file that sets engine defaults and extends the built-in
//! registry with extra codecs, hash functions and bases.

pub mod engine_config;

// Re-export commonly used items
pub use engine_config::{BaseKind, BaseSpec, EngineConfig};
