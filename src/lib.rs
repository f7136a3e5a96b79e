//! cidfmt - content identifier resolution and formatting
//!
//! cidfmt decodes self-describing content identifiers (CIDs), converts them
//! between versions, and renders them through a small printf-style template
//! language backed by registries of multibase, multicodec and multihash
//! entries.
//!
//! # Core Features
//!
//! - **Resolution**: bare base58btc CIDv0, multibase-prefixed CIDv1 and `/ipfs/` paths
//! - **Version Conversion**: CIDv0 to CIDv1 and back where the identifier allows it
//! - **Templates**: `%s`, `%b`, `%c`, `%h`, `%P` and friends, parsed once and reused
//! - **Registries**: built-in tables, extensible from a TOML configuration file
//! - **Batch Formatting**: one identifier per line with per-line error records
//!
//! # Example Usage
//!
//! ```rust
//! use cidfmt::{Engine, ResolveOptions};
//!
//! let engine = Engine::with_defaults();
//! let options = ResolveOptions::new().with_version(1).with_base("base32");
//!
//! let (cid, base) = engine.resolve_identifier(
//!     "QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn",
//!     &options,
//! )?;
//! let text = engine.format_identifier("%s", &cid, &base)?;
//! assert_eq!(text, "bafybeiczsscdsbs7ffqz55asqdf3smv6klcw3gofszvwlyarci47bgf354");
//! # Ok::<(), cidfmt::CidError>(())
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod format;
pub mod multibase;
pub mod registry;
pub mod resolve;

// Re-export commonly used types
pub use core::{
    error::{CidError, EncodingKind, Result},
    multihash::Multihash,
    types::{Cid, Prefix, Version},
};

pub use config::EngineConfig;

pub use engine::{Engine, FormatBatch, FormatRecord};

pub use format::{format_identifier, Directive, Template};

pub use multibase::{decode_with_base, encode_with_base};

pub use registry::{Base, BaseCodec, Codec, Hasher, Registry};

pub use resolve::{resolve_identifier, ResolveOptions};

/// Current version of cidfmt
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
