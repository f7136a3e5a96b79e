//! Multihash values: a hash-function code plus an already-computed digest

use crate::core::error::{CidError, Result};
use std::fmt;
use unsigned_varint::{decode as varint_decode, encode as varint_encode};

/// Multihash code of sha2-256
pub const SHA2_256: u64 = 0x12;

/// Digest length carried by every legacy (CIDv0) multihash
pub const SHA2_256_LEN: usize = 32;

/// A self-describing digest: `varint(code) varint(len) digest`
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Wrap an existing digest under a hash-function code
    pub fn wrap(code: u64, digest: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            digest: digest.into(),
        }
    }

    /// Hash-function code
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Digest bytes only
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Digest length in bytes
    pub fn size(&self) -> usize {
        self.digest.len()
    }

    /// True when this is a sha2-256 multihash with a 32-byte digest
    pub fn is_legacy_sha256(&self) -> bool {
        self.code == SHA2_256 && self.digest.len() == SHA2_256_LEN
    }

    /// Serialize to multihash bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.digest.len() + 4);
        self.write_bytes(&mut out);
        out
    }

    pub(crate) fn write_bytes(&self, out: &mut Vec<u8>) {
        write_varint(out, self.code);
        write_varint(out, self.digest.len() as u64);
        out.extend_from_slice(&self.digest);
    }

    /// Parse multihash bytes, requiring the input to be consumed exactly
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (multihash, rest) = Self::read(bytes)?;
        if !rest.is_empty() {
            return Err(CidError::malformed(format!(
                "{} trailing bytes after multihash digest",
                rest.len()
            )));
        }
        Ok(multihash)
    }

    /// Parse a multihash from the front of `bytes`, returning the remainder
    pub(crate) fn read(bytes: &[u8]) -> Result<(Self, &[u8])> {
        let (code, rest) = read_varint(bytes, "hash function code")?;
        let (len, rest) = read_varint(rest, "digest length")?;
        let len = usize::try_from(len)
            .map_err(|_| CidError::malformed(format!("digest length {} out of range", len)))?;
        if rest.len() < len {
            return Err(CidError::malformed(format!(
                "digest declares {} bytes but only {} remain",
                len,
                rest.len()
            )));
        }
        let (digest, rest) = rest.split_at(len);
        Ok((Self::wrap(code, digest), rest))
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multihash(0x{:x}, {})",
            self.code,
            hex::encode(&self.digest)
        )
    }
}

/// Append an unsigned LEB128 varint
pub(crate) fn write_varint(out: &mut Vec<u8>, value: u64) {
    let mut buf = varint_encode::u64_buffer();
    out.extend_from_slice(varint_encode::u64(value, &mut buf));
}

/// Read an unsigned LEB128 varint, naming the field in the error
pub(crate) fn read_varint<'a>(bytes: &'a [u8], field: &str) -> Result<(u64, &'a [u8])> {
    varint_decode::u64(bytes)
        .map_err(|e| CidError::malformed(format!("invalid {} varint: {}", field, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multihash_bytes_layout() {
        let mh = Multihash::wrap(SHA2_256, vec![0xab; 32]);
        let bytes = mh.to_bytes();

        assert_eq!(bytes.len(), 34);
        assert_eq!(&bytes[..2], &[0x12, 0x20]);
        assert_eq!(Multihash::from_bytes(&bytes).unwrap(), mh);
    }

    #[test]
    fn test_multibyte_code_varint() {
        // blake2b-256 is 0xb220, which needs three varint bytes
        let mh = Multihash::wrap(0xb220, vec![1, 2, 3]);
        let bytes = mh.to_bytes();
        assert_eq!(&bytes[..4], &[0xa0, 0xe4, 0x02, 0x03]);
        assert_eq!(Multihash::from_bytes(&bytes).unwrap().code(), 0xb220);
    }

    #[test]
    fn test_truncated_digest_rejected() {
        let result = Multihash::from_bytes(&[0x12, 0x20, 0x00, 0x01]);
        assert!(matches!(
            result,
            Err(CidError::MalformedIdentifierBytes { .. })
        ));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let result = Multihash::from_bytes(&[0x12, 0x01, 0xff, 0x00]);
        assert!(matches!(
            result,
            Err(CidError::MalformedIdentifierBytes { .. })
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(Multihash::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_legacy_detection() {
        assert!(Multihash::wrap(SHA2_256, vec![0; 32]).is_legacy_sha256());
        assert!(!Multihash::wrap(SHA2_256, vec![0; 20]).is_legacy_sha256());
        assert!(!Multihash::wrap(0x1e, vec![0; 32]).is_legacy_sha256());
    }
}
