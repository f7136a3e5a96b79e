//! Engine configuration
//!
//! Stored as TOML, by default in the per-user config directory
//! (`~/.config/cidfmt/config.toml` on Linux).
//!
//! ```toml
//! default_format = "%s"
//! default_base = "base32"
//! upgrade_legacy_on_base_override = true
//!
//! [[codecs]]
//! name = "my-codec"
//! code = 0x300001
//!
//! [[bases]]
//! name = "base4"
//! prefix = "4"
//! alphabet = "0123"
//! kind = "bits"
//! ```

use crate::core::error::{CidError, Result};
use crate::multibase::codecs::{BitsCodec, RadixCodec};
use crate::registry::{Base, Codec, DecodeError, Hasher, Registry};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for an [`Engine`](crate::engine::Engine)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Template used by batch formatting when none is given
    pub default_format: Option<String>,
    /// Base used when a resolve call names none
    pub default_base: Option<String>,
    /// Upgrade CIDv0 to CIDv1 when a base is chosen without a version
    pub upgrade_legacy_on_base_override: bool,
    /// Extra multicodec entries
    pub codecs: Vec<Codec>,
    /// Extra multihash entries
    pub hashers: Vec<Hasher>,
    /// Extra multibase entries
    pub bases: Vec<BaseSpec>,
}

/// How a configured base turns bytes into symbols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseKind {
    /// Big-integer positional encoding, any alphabet size up to 256
    #[default]
    Radix,
    /// RFC 4648 bit packing, alphabet size a power of two up to 64
    Bits,
}

/// A multibase declared in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSpec {
    pub name: String,
    pub prefix: char,
    pub alphabet: String,
    #[serde(default)]
    pub kind: BaseKind,
    #[serde(default)]
    pub padding: Option<char>,
}

impl BaseSpec {
    /// Build the registry entry for this configured base
    pub fn to_base(&self) -> Result<Base> {
        let invalid = |e: DecodeError| CidError::configuration(format!("base {}: {}", self.name, e));
        match self.kind {
            BaseKind::Radix => {
                if self.padding.is_some() {
                    return Err(CidError::configuration(format!(
                        "base {}: padding is only valid for kind = \"bits\"",
                        self.name
                    )));
                }
                let codec = RadixCodec::new(&self.alphabet).map_err(invalid)?;
                Ok(Base::new(self.name.as_str(), self.prefix, codec))
            }
            BaseKind::Bits => {
                let codec = BitsCodec::from_symbols(&self.alphabet, self.padding).map_err(invalid)?;
                Ok(Base::new(self.name.as_str(), self.prefix, codec))
            }
        }
    }
}

impl EngineConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded engine configuration");
        Ok(config)
    }

    /// Load the per-user configuration, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CidError::configuration(format!("Failed to serialize config: {}", e)))
    }

    /// Get the path to the per-user configuration file
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "cidfmt")
            .ok_or_else(|| CidError::configuration("Home directory not found"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The built-in registry extended with the configured entries
    pub fn build_registry(&self) -> Result<Registry> {
        let mut registry = Registry::with_defaults();
        for codec in &self.codecs {
            registry.register_codec(codec.clone())?;
        }
        for hasher in &self.hashers {
            registry.register_hasher(hasher.clone())?;
        }
        for spec in &self.bases {
            registry.register_base(spec.to_base()?)?;
        }
        Ok(registry)
    }
}
