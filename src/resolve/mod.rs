//! Identifier resolution
//!
//! Turns the textual form of an identifier into a [`Cid`] plus the base to
//! render it in by default. Accepted inputs:
//!
//! - a bare base58btc CIDv0, e.g. `QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn`
//! - a multibase-prefixed CIDv1, e.g. `bafybei...`
//! - either of the above behind an `/ipfs/` path, e.g. `/ipfs/Qm.../docs/index.html`

pub mod parser;

use crate::core::types::Cid;
use crate::registry::Base;

pub use parser::{decode_identifier, extract_identifier, resolve_identifier};

/// Path prefix stripped before decoding
pub const IPFS_PATH_PREFIX: &str = "/ipfs/";

/// Overrides applied while resolving
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Convert to this version after decoding (must be 0 or 1)
    pub target_version: Option<u64>,
    /// Render in this base instead of the one the input was written in
    pub explicit_base: Option<String>,
    /// With an explicit base and no target version, upgrade CIDv0 to CIDv1
    pub upgrade_legacy_on_base_override: bool,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a version conversion
    pub fn with_version(mut self, version: u64) -> Self {
        self.target_version = Some(version);
        self
    }

    /// Request an explicit output base by name
    pub fn with_base(mut self, name: impl Into<String>) -> Self {
        self.explicit_base = Some(name.into());
        self
    }

    pub fn with_legacy_upgrade(mut self, enabled: bool) -> Self {
        self.upgrade_legacy_on_base_override = enabled;
        self
    }
}

/// A resolved identifier and its default output base
pub type Resolved = (Cid, Base);
