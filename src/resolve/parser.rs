//! Identifier resolution implementation

use crate::core::error::{CidError, Result};
use crate::core::types::{Cid, Version};
use crate::format::BASE58BTC;
use crate::registry::Registry;
use crate::resolve::{ResolveOptions, Resolved, IPFS_PATH_PREFIX};
use tracing::debug;

/// Resolve a textual identifier, applying version and base overrides
pub fn resolve_identifier(
    registry: &Registry,
    text: &str,
    options: &ResolveOptions,
) -> Result<Resolved> {
    let target = options
        .target_version
        .map(Version::try_from)
        .transpose()?;

    let (cid, decode_base) = decode_identifier(registry, extract_identifier(text))?;

    let cid = match target {
        Some(version) if version != cid.version() => {
            debug!(from = %cid.version(), to = %version, "converting identifier version");
            cid.to_version(version)?
        }
        None if cid.version() == Version::V0
            && options.explicit_base.is_some()
            && options.upgrade_legacy_on_base_override =>
        {
            debug!("upgrading legacy identifier for explicit base");
            cid.to_v1()
        }
        _ => cid,
    };

    let base = match options.explicit_base.as_deref() {
        Some(name) => registry.find_base_by_name(name)?.clone(),
        None => decode_base,
    };

    Ok((cid, base))
}

/// Strip an `/ipfs/` path down to the identifier segment
pub fn extract_identifier(text: &str) -> &str {
    match text.strip_prefix(IPFS_PATH_PREFIX) {
        Some(rest) => rest.find('/').map_or(rest, |end| &rest[..end]),
        None => text,
    }
}

/// Decode an identifier string, returning it with the base it was written in
///
/// Unprefixed base58btc that decodes to a sha2-256 multihash is a CIDv0 and is
/// tried first; anything else must start with a registered multibase prefix.
pub fn decode_identifier(registry: &Registry, text: &str) -> Result<Resolved> {
    let prefix = text
        .chars()
        .next()
        .ok_or_else(|| CidError::malformed("empty identifier"))?;

    if let Some(cid) = decode_legacy(text) {
        let base = registry.find_base_by_name(BASE58BTC)?;
        debug!(base = base.name(), "decoded legacy identifier");
        return Ok((cid, base.clone()));
    }

    let base = registry.find_base_by_prefix(prefix)?;
    let bytes = base.decode(text)?;
    let cid = Cid::from_bytes(&bytes)?;
    debug!(base = base.name(), version = %cid.version(), "decoded identifier");
    Ok((cid, base.clone()))
}

/// A bare base58btc string that decodes to a legacy sha2-256 multihash
fn decode_legacy(text: &str) -> Option<Cid> {
    let bytes = bs58::decode(text).into_vec().ok()?;
    if !Cid::looks_legacy(&bytes) {
        return None;
    }
    Cid::from_bytes(&bytes).ok()
}
