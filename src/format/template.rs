//! Format string parsing

use crate::core::error::{CidError, Result};
use std::str::FromStr;

/// Alias accepted in place of a template, shorthand for `%P`
pub const PREFIX_ALIAS: &str = "prefix";

/// The fixed set of `%x` directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `%b` base name
    BaseName,
    /// `%B` base prefix character
    BasePrefix,
    /// `%v` version string, `cidv<n>`
    VersionString,
    /// `%V` version number
    VersionNumber,
    /// `%c` codec name
    CodecName,
    /// `%C` codec code
    CodecCode,
    /// `%h` hash function name
    HashName,
    /// `%H` hash function code
    HashCode,
    /// `%L` digest length
    DigestLength,
    /// `%m` multihash bytes, prefixed
    Multihash,
    /// `%M` multihash bytes, unprefixed
    MultihashRaw,
    /// `%d` digest bytes, prefixed
    Digest,
    /// `%D` digest bytes, unprefixed
    DigestRaw,
    /// `%s` full identifier, prefixed (bare for a base58btc CIDv0)
    Cid,
    /// `%S` full identifier, unprefixed
    CidRaw,
    /// `%P` `cidv<version>-<codec>-<hash>-<length>`
    Prefix,
}

impl Directive {
    pub fn from_char(c: char) -> Option<Self> {
        let directive = match c {
            'b' => Directive::BaseName,
            'B' => Directive::BasePrefix,
            'v' => Directive::VersionString,
            'V' => Directive::VersionNumber,
            'c' => Directive::CodecName,
            'C' => Directive::CodecCode,
            'h' => Directive::HashName,
            'H' => Directive::HashCode,
            'L' => Directive::DigestLength,
            'm' => Directive::Multihash,
            'M' => Directive::MultihashRaw,
            'd' => Directive::Digest,
            'D' => Directive::DigestRaw,
            's' => Directive::Cid,
            'S' => Directive::CidRaw,
            'P' => Directive::Prefix,
            _ => return None,
        };
        Some(directive)
    }

    pub fn as_char(&self) -> char {
        match self {
            Directive::BaseName => 'b',
            Directive::BasePrefix => 'B',
            Directive::VersionString => 'v',
            Directive::VersionNumber => 'V',
            Directive::CodecName => 'c',
            Directive::CodecCode => 'C',
            Directive::HashName => 'h',
            Directive::HashCode => 'H',
            Directive::DigestLength => 'L',
            Directive::Multihash => 'm',
            Directive::MultihashRaw => 'M',
            Directive::Digest => 'd',
            Directive::DigestRaw => 'D',
            Directive::Cid => 's',
            Directive::CidRaw => 'S',
            Directive::Prefix => 'P',
        }
    }
}

/// A piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Directive(Directive),
}

/// A validated format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse and validate a format string
    ///
    /// `%%` is a literal percent sign. A string with no `%` at all is
    /// rejected so a mistyped template is never echoed back unchanged.
    pub fn parse(text: &str) -> Result<Self> {
        let source = if text == PREFIX_ALIAS { "%P" } else { text };

        if !source.contains('%') {
            return Err(CidError::InvalidFormatString {
                template: text.to_string(),
            });
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let spec = chars.next().ok_or(CidError::PrematureEndOfFormatString)?;
            if spec == '%' {
                literal.push('%');
                continue;
            }

            let directive = Directive::from_char(spec)
                .ok_or(CidError::UnrecognizedFormatSpecifier { specifier: spec })?;
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Directive(directive));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The format string after alias expansion
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Directive(d) => Some(*d),
            Segment::Literal(_) => None,
        })
    }
}

impl FromStr for Template {
    type Err = CidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
