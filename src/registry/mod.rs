//! Lookup tables for multibase, multicodec and multihash entries
//!
//! A `Registry` is filled once during initialisation (`with_defaults` plus any
//! `register_*` calls) and then shared read-only. Lookups are exact,
//! case-sensitive, and report misses as `UnknownEncoding` / `UnknownBasePrefix`
//! so callers can tell which table failed.

pub mod defaults;
pub mod entry;

pub use entry::{Base, BaseCodec, Codec, DecodeError, Hasher};

use crate::core::error::{CidError, EncodingKind, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::debug;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::with_defaults);

/// Process-wide registry holding the built-in tables
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Name-keyed tables, iterated in registration order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    bases: IndexMap<String, Base>,
    codecs: IndexMap<String, Codec>,
    hashers: IndexMap<String, Hasher>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tables
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for base in defaults::bases() {
            registry.bases.insert(base.name().to_string(), base);
        }
        for (name, code) in defaults::CODECS {
            registry
                .codecs
                .insert(name.to_string(), Codec::new(*name, *code));
        }
        for (name, code) in defaults::HASHERS {
            registry
                .hashers
                .insert(name.to_string(), Hasher::new(*name, *code));
        }
        registry
    }

    /// Add a base; name and prefix must both be unused
    pub fn register_base(&mut self, base: Base) -> Result<()> {
        if self.bases.contains_key(base.name()) {
            return Err(CidError::duplicate(EncodingKind::Base, base.name()));
        }
        if self.bases.values().any(|b| b.prefix() == base.prefix()) {
            return Err(CidError::duplicate(EncodingKind::Base, base.prefix()));
        }
        debug!(name = base.name(), prefix = %base.prefix(), "registered base");
        self.bases.insert(base.name().to_string(), base);
        Ok(())
    }

    /// Add a codec; name and code must both be unused
    pub fn register_codec(&mut self, codec: Codec) -> Result<()> {
        if self.codecs.contains_key(&codec.name) {
            return Err(CidError::duplicate(EncodingKind::Codec, &codec.name));
        }
        if self.codecs.values().any(|c| c.code == codec.code) {
            return Err(CidError::duplicate(EncodingKind::Codec, codec.code));
        }
        debug!(name = %codec.name, code = codec.code, "registered codec");
        self.codecs.insert(codec.name.clone(), codec);
        Ok(())
    }

    /// Add a hash function; name and code must both be unused
    pub fn register_hasher(&mut self, hasher: Hasher) -> Result<()> {
        if self.hashers.contains_key(&hasher.name) {
            return Err(CidError::duplicate(EncodingKind::Hasher, &hasher.name));
        }
        if self.hashers.values().any(|h| h.code == hasher.code) {
            return Err(CidError::duplicate(EncodingKind::Hasher, hasher.code));
        }
        debug!(name = %hasher.name, code = hasher.code, "registered hasher");
        self.hashers.insert(hasher.name.clone(), hasher);
        Ok(())
    }

    pub fn find_base_by_prefix(&self, prefix: char) -> Result<&Base> {
        self.bases
            .values()
            .find(|b| b.prefix() == prefix)
            .ok_or(CidError::UnknownBasePrefix { prefix })
    }

    pub fn find_base_by_name(&self, name: &str) -> Result<&Base> {
        self.bases
            .get(name)
            .ok_or_else(|| CidError::unknown_base(name))
    }

    pub fn find_codec_by_code(&self, code: u64) -> Result<&Codec> {
        self.codecs
            .values()
            .find(|c| c.code == code)
            .ok_or_else(|| CidError::unknown_codec(code))
    }

    pub fn find_codec_by_name(&self, name: &str) -> Result<&Codec> {
        self.codecs
            .get(name)
            .ok_or_else(|| CidError::unknown_codec(name))
    }

    pub fn find_hasher_by_code(&self, code: u64) -> Result<&Hasher> {
        self.hashers
            .values()
            .find(|h| h.code == code)
            .ok_or_else(|| CidError::unknown_hasher(code))
    }

    pub fn find_hasher_by_name(&self, name: &str) -> Result<&Hasher> {
        self.hashers
            .get(name)
            .ok_or_else(|| CidError::unknown_hasher(name))
    }

    pub fn bases(&self) -> impl Iterator<Item = &Base> {
        self.bases.values()
    }

    pub fn codecs(&self) -> impl Iterator<Item = &Codec> {
        self.codecs.values()
    }

    pub fn hashers(&self) -> impl Iterator<Item = &Hasher> {
        self.hashers.values()
    }
}
