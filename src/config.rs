//! Configuration management for the model compiler
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (models.toml)
//! - Environment variables (MODELS_*)
//!
//! ## Example config file (models.toml):
//! ```toml
//! [naming]
//! anonymous_prefix = "ClassFromZod"
//! enum_suffix = "Enum"
//! acronyms = ["ID", "URL", "API"]
//!
//! [output]
//! format = "pretty"
//! include_properties = false
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Main configuration for the model compiler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Naming settings
    #[serde(default)]
    pub naming: NamingConfig,

    /// Output settings (CLI)
    #[serde(default)]
    pub output: OutputConfig,
}

/// Naming configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Prefix for synthesized model names (`<prefix>_<n>`)
    #[serde(default = "default_anonymous_prefix")]
    pub anonymous_prefix: String,

    /// Suffix appended to generated enum type names
    #[serde(default = "default_enum_suffix")]
    pub enum_suffix: String,

    /// Acronyms kept upper-case when building type names from field keys
    #[serde(default = "default_acronyms")]
    pub acronyms: BTreeSet<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (pretty or compact)
    #[serde(default)]
    pub format: OutputFormat,

    /// Include property slots in printed field descriptors
    #[serde(default)]
    pub include_properties: bool,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

// Default value functions
fn default_anonymous_prefix() -> String {
    "ClassFromZod".to_string()
}

fn default_enum_suffix() -> String {
    "Enum".to_string()
}

fn default_acronyms() -> BTreeSet<String> {
    ["ID", "URL", "UUID", "API", "HTTP", "JSON", "IO"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            anonymous_prefix: default_anonymous_prefix(),
            enum_suffix: default_enum_suffix(),
            acronyms: default_acronyms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            include_properties: false,
        }
    }
}

impl CompilerConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["models.toml", ".models.toml", "config/models.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "models") {
            let xdg_config = config_dir.config_dir().join("models.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Environment variables (MODELS__NAMING__ENUM_SUFFIX=...)
        builder = builder.add_source(
            Environment::with_prefix("MODELS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
