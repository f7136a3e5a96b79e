//! Registry entry types: multibase bases, multicodec codecs, multihash functions

use crate::core::error::{CidError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Reason a payload could not be decoded in a base's alphabet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(pub String);

impl DecodeError {
    pub fn new(reason: impl fmt::Display) -> Self {
        Self(reason.to_string())
    }
}

/// Alphabet-level encode/decode, without any multibase prefix
pub trait BaseCodec: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> String;

    fn decode(&self, text: &str) -> std::result::Result<Vec<u8>, DecodeError>;
}

/// A multibase text encoding
///
/// The single-character prefix doubles as the base's numeric code.
#[derive(Clone)]
pub struct Base {
    name: String,
    prefix: char,
    codec: Arc<dyn BaseCodec>,
}

impl Base {
    pub fn new(name: impl Into<String>, prefix: char, codec: impl BaseCodec + 'static) -> Self {
        Self {
            name: name.into(),
            prefix,
            codec: Arc::new(codec),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Numeric multibase code (the prefix code point)
    pub fn code(&self) -> u32 {
        u32::from(self.prefix)
    }

    /// Encode with the prefix character prepended
    pub fn encode(&self, bytes: &[u8]) -> String {
        let mut out = String::new();
        out.push(self.prefix);
        out.push_str(&self.codec.encode(bytes));
        out
    }

    /// Encode without a prefix
    pub fn encode_raw(&self, bytes: &[u8]) -> String {
        self.codec.encode(bytes)
    }

    /// Decode text that must start with this base's prefix
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        match text.strip_prefix(self.prefix) {
            Some(payload) => self.decode_raw(payload),
            None => Err(CidError::invalid_base_encoding(
                self.name.as_str(),
                format!("expected prefix {:?}", self.prefix),
            )),
        }
    }

    /// Decode text that carries no prefix
    pub fn decode_raw(&self, text: &str) -> Result<Vec<u8>> {
        self.codec
            .decode(text)
            .map_err(|e| CidError::invalid_base_encoding(self.name.as_str(), e))
    }
}

impl PartialEq for Base {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.prefix == other.prefix
    }
}

impl Eq for Base {}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base")
            .field("name", &self.name)
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// A multicodec content type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Codec {
    pub name: String,
    pub code: u64,
}

impl Codec {
    pub fn new(name: impl Into<String>, code: u64) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }
}

/// A multihash function
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hasher {
    pub name: String,
    pub code: u64,
}

impl Hasher {
    pub fn new(name: impl Into<String>, code: u64) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }
}
