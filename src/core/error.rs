//! Error types for cidfmt

use std::fmt;
use thiserror::Error;

/// Which registry table a failed lookup went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    Base,
    Codec,
    Hasher,
}

impl EncodingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingKind::Base => "base",
            EncodingKind::Codec => "codec",
            EncodingKind::Hasher => "hasher",
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for identifier operations
#[derive(Error, Debug)]
pub enum CidError {
    /// Identifier structure errors
    #[error("Invalid CID version: {version} (expected 0 or 1)")]
    InvalidCidVersion { version: u64 },

    #[error("Cannot convert to CIDv0: codec 0x{codec:x} / hash 0x{hash:x} (requires dag-pb with a 32-byte sha2-256 digest)")]
    IncompatibleVersionDowngrade { codec: u64, hash: u64 },

    #[error("Malformed identifier bytes: {reason}")]
    MalformedIdentifierBytes { reason: String },

    /// Registry errors
    #[error("Unknown multibase prefix: {prefix:?}")]
    UnknownBasePrefix { prefix: char },

    #[error("Unknown {kind} encoding: {key}")]
    UnknownEncoding { kind: EncodingKind, key: String },

    #[error("Duplicate {kind} entry: {key}")]
    DuplicateEntry { kind: EncodingKind, key: String },

    /// Multibase payload errors
    #[error("Invalid {base} data: {reason}")]
    InvalidBaseEncoding { base: String, reason: String },

    /// Template errors
    #[error("Invalid format string: {template:?} contains no directives")]
    InvalidFormatString { template: String },

    #[error("Unrecognized specifier in format string: %{specifier}")]
    UnrecognizedFormatSpecifier { specifier: char },

    #[error("Premature end of format string")]
    PrematureEndOfFormatString,

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl CidError {
    /// Create a new invalid version error
    pub fn invalid_version(version: u64) -> Self {
        Self::InvalidCidVersion { version }
    }

    /// Create a new malformed bytes error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedIdentifierBytes {
            reason: reason.into(),
        }
    }

    /// Create a new unknown base name error
    pub fn unknown_base(name: impl Into<String>) -> Self {
        Self::UnknownEncoding {
            kind: EncodingKind::Base,
            key: name.into(),
        }
    }

    /// Create a new unknown codec error
    pub fn unknown_codec(key: impl fmt::Display) -> Self {
        Self::UnknownEncoding {
            kind: EncodingKind::Codec,
            key: key.to_string(),
        }
    }

    /// Create a new unknown hasher error
    pub fn unknown_hasher(key: impl fmt::Display) -> Self {
        Self::UnknownEncoding {
            kind: EncodingKind::Hasher,
            key: key.to_string(),
        }
    }

    pub fn duplicate(kind: EncodingKind, key: impl fmt::Display) -> Self {
        Self::DuplicateEntry {
            kind,
            key: key.to_string(),
        }
    }

    /// Create a new invalid payload error for a named base
    pub fn invalid_base_encoding(base: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::InvalidBaseEncoding {
            base: base.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the template itself rather than by one identifier
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormatString { .. }
                | Self::UnrecognizedFormatSpecifier { .. }
                | Self::PrematureEndOfFormatString
        )
    }
}

/// Result type alias for identifier operations
pub type Result<T> = std::result::Result<T, CidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_encoding_display() {
        let err = CidError::unknown_codec(0x9999);
        assert_eq!(err.to_string(), "Unknown codec encoding: 39321");

        let err = CidError::unknown_base("base99");
        assert_eq!(err.to_string(), "Unknown base encoding: base99");
    }

    #[test]
    fn test_template_error_classification() {
        assert!(CidError::PrematureEndOfFormatString.is_template_error());
        assert!(CidError::UnrecognizedFormatSpecifier { specifier: 'q' }.is_template_error());
        assert!(!CidError::invalid_version(2).is_template_error());
    }
}
