//! Engine facade
//!
//! [`Engine`] bundles a registry with the defaults from an [`EngineConfig`]
//! and exposes resolve, format and enumeration in one place. It is immutable
//! after construction and cheap to clone, so one instance can serve many
//! threads.

pub mod batch;

pub use batch::{BatchSummary, FormatBatch, FormatRecord};

use crate::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::Cid;
use crate::format::{Template, DEFAULT_TEMPLATE};
use crate::multibase;
use crate::registry::{Base, Codec, Hasher, Registry};
use crate::resolve::{self, ResolveOptions, Resolved};
use std::sync::Arc;
use tracing::debug;

/// Identifier resolution and formatting over one registry
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<Registry>,
    config: EngineConfig,
}

impl Engine {
    /// Engine over an existing registry with default settings
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            config: EngineConfig::default(),
        }
    }

    /// Engine over the built-in registry
    pub fn with_defaults() -> Self {
        Self::new(Registry::with_defaults())
    }

    /// Engine built from configuration
    ///
    /// The configured default base and template are checked here so a bad
    /// configuration fails at startup rather than on the first call.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let registry = config.build_registry()?;
        if let Some(name) = config.default_base.as_deref() {
            registry.find_base_by_name(name)?;
        }
        if let Some(template) = config.default_format.as_deref() {
            Template::parse(template)?;
        }
        debug!(
            bases = registry.bases().count(),
            codecs = registry.codecs().count(),
            hashers = registry.hashers().count(),
            "engine initialised"
        );
        Ok(Self {
            registry: Arc::new(registry),
            config,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Caller options with configured defaults filled in
    pub fn effective_options(&self, options: &ResolveOptions) -> ResolveOptions {
        let mut merged = options.clone();
        if merged.explicit_base.is_none() {
            merged.explicit_base = self.config.default_base.clone();
        }
        merged.upgrade_legacy_on_base_override |= self.config.upgrade_legacy_on_base_override;
        merged
    }

    /// Decode a textual identifier and pick its output base
    pub fn resolve_identifier(&self, text: &str, options: &ResolveOptions) -> Result<Resolved> {
        resolve::resolve_identifier(&self.registry, text, &self.effective_options(options))
    }

    /// Render an identifier through a template
    pub fn format_identifier(&self, template: &str, cid: &Cid, base: &Base) -> Result<String> {
        crate::format::format_identifier(&self.registry, template, cid, base)
    }

    /// Resolve then format a single identifier
    ///
    /// Without a template the configured default (or `%s`) is used.
    pub fn format(&self, text: &str, template: Option<&str>, options: &ResolveOptions) -> Result<String> {
        let template = Template::parse(self.template_source(template))?;
        let (cid, base) = self.resolve_identifier(text, options)?;
        template.render(&self.registry, &cid, &base)
    }

    /// Format a stream of identifiers, one per item
    ///
    /// The template is parsed once up front and a bad template fails the
    /// whole call. Per-identifier failures are reported in the records.
    pub fn format_batch<I, S>(
        &self,
        template: Option<&str>,
        options: &ResolveOptions,
        inputs: I,
    ) -> Result<FormatBatch<'_, I::IntoIter>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let template = Template::parse(self.template_source(template))?;
        Ok(FormatBatch::new(self, template, options.clone(), inputs.into_iter()))
    }

    pub fn list_bases(&self) -> Vec<Base> {
        self.registry.bases().cloned().collect()
    }

    pub fn list_codecs(&self) -> Vec<Codec> {
        self.registry.codecs().cloned().collect()
    }

    pub fn list_hashers(&self) -> Vec<Hasher> {
        self.registry.hashers().cloned().collect()
    }

    /// Encode bytes in the named base, prefix included
    pub fn encode_with_base(&self, bytes: &[u8], base: &str) -> Result<String> {
        let base = self.registry.find_base_by_name(base)?;
        Ok(multibase::encode_with_base(bytes, base))
    }

    /// Decode multibase text, detecting the base from its prefix
    pub fn decode(&self, text: &str) -> Result<(Base, Vec<u8>)> {
        let prefix = text
            .chars()
            .next()
            .ok_or_else(|| crate::core::CidError::invalid_base_encoding("multibase", "empty input"))?;
        let base = self.registry.find_base_by_prefix(prefix)?;
        let bytes = multibase::decode_with_base(text, base)?;
        Ok((base.clone(), bytes))
    }

    fn template_source<'t>(&'t self, template: Option<&'t str>) -> &'t str {
        template
            .or(self.config.default_format.as_deref())
            .unwrap_or(DEFAULT_TEMPLATE)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
