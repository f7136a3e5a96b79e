//! Multibase text encodings
//!
//! Every registered base renders bytes as `<prefix><payload>`. The one
//! exception lives outside this module: a CIDv0 is written as bare base58btc
//! with no prefix at all, and the resolver and formatter special-case it.

pub mod codecs;

use crate::core::error::Result;
use crate::registry::Base;
use data_encoding::BASE32_NOPAD;

/// Encode bytes in `base`, prefix included
pub fn encode_with_base(bytes: &[u8], base: &Base) -> String {
    base.encode(bytes)
}

/// Decode prefixed text in `base`; the prefix must match exactly
pub fn decode_with_base(text: &str, base: &Base) -> Result<Vec<u8>> {
    base.decode(text)
}

/// Bare base58btc (Bitcoin alphabet), the legacy CIDv0 text form
pub fn encode_base58btc(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Lowercase unpadded base32, the default CIDv1 payload
pub fn encode_base32_lower(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes).to_ascii_lowercase()
}
