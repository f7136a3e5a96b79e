//! Template rendering of identifiers
//!
//! A template is parsed up front (see [`template`]) and then rendered against
//! one identifier, one base and a registry. Rendering is all-or-nothing: the
//! first failed lookup aborts the call and no partial output is returned.

pub mod template;

pub use template::{Directive, Segment, Template, PREFIX_ALIAS};

use crate::core::error::Result;
use crate::core::types::{Cid, Version};
use crate::registry::{Base, Registry};
use tracing::trace;

/// Name of the base whose CIDv0 rendering carries no prefix
pub const BASE58BTC: &str = "base58btc";

/// Default template, the identifier in the chosen base
pub const DEFAULT_TEMPLATE: &str = "%s";

/// Parse `template` and render `cid` through it
pub fn format_identifier(
    registry: &Registry,
    template: &str,
    cid: &Cid,
    base: &Base,
) -> Result<String> {
    Template::parse(template)?.render(registry, cid, base)
}

impl Template {
    /// Render an identifier through this template
    pub fn render(&self, registry: &Registry, cid: &Cid, base: &Base) -> Result<String> {
        let mut out = String::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Directive(directive) => {
                    let value = render_directive(*directive, registry, cid, base)?;
                    trace!(directive = %directive.as_char(), value = %value, "rendered directive");
                    out.push_str(&value);
                }
            }
        }
        Ok(out)
    }
}

/// Resolve one directive against an identifier, a base and a registry
pub fn render_directive(
    directive: Directive,
    registry: &Registry,
    cid: &Cid,
    base: &Base,
) -> Result<String> {
    let value = match directive {
        Directive::BaseName => base.name().to_string(),
        Directive::BasePrefix => base.prefix().to_string(),
        Directive::VersionString => cid.version().to_string(),
        Directive::VersionNumber => cid.version().as_u64().to_string(),
        Directive::CodecName => registry.find_codec_by_code(cid.codec())?.name.clone(),
        Directive::CodecCode => registry.find_codec_by_code(cid.codec())?.code.to_string(),
        Directive::HashName => registry.find_hasher_by_code(cid.hash().code())?.name.clone(),
        Directive::HashCode => registry
            .find_hasher_by_code(cid.hash().code())?
            .code
            .to_string(),
        Directive::DigestLength => cid.hash().size().to_string(),
        Directive::Multihash => base.encode(&cid.hash().to_bytes()),
        Directive::MultihashRaw => base.encode_raw(&cid.hash().to_bytes()),
        Directive::Digest => base.encode(cid.hash().digest()),
        Directive::DigestRaw => base.encode_raw(cid.hash().digest()),
        Directive::Cid => {
            // A CIDv0 in base58btc is written bare; every other pairing is prefixed
            if cid.version() == Version::V0 && base.name() == BASE58BTC {
                base.encode_raw(&cid.to_bytes())
            } else {
                base.encode(&cid.to_bytes())
            }
        }
        Directive::CidRaw => base.encode_raw(&cid.to_bytes()),
        Directive::Prefix => format!(
            "{}-{}-{}-{}",
            cid.version(),
            registry.find_codec_by_code(cid.codec())?.name,
            registry.find_hasher_by_code(cid.hash().code())?.name,
            cid.hash().size()
        ),
    };
    Ok(value)
}
