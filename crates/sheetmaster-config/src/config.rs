//! Configuration types and loading.
//!
//! The main entry point is [`SiteConfig`]. [`load_config`] layers built-in
//! defaults, `.sheetmaster/config.yaml` and `SHEETMASTER_*` environment
//! variables, in that order. [`save_config`] writes the YAML file back.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the config file inside the project directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Prefix for environment overrides (`SHEETMASTER_BASE_URL`, ...).
pub const ENV_PREFIX: &str = "SHEETMASTER_";

const DEFAULT_BASE_URL: &str = "https://www.getsheetmaster.com";
const DEFAULT_SITE_NAME: &str = "SheetMaster";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file could not be serialized.
    #[error("failed to serialize config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Layered extraction failed (bad YAML, bad env value, wrong type).
    #[error("failed to load configuration: {0}")]
    LoadError(#[from] Box<figment::Error>),

    /// The `.sheetmaster/` directory was not found.
    #[error("no .sheetmaster directory found (run 'sm config init' first)")]
    ProjectDirNotFound,

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    /// The key is not a known configuration key.
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Whether terminal output is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal and the environment allows it.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(ConfigError::InvalidValue {
                key: "color".to_string(),
                reason: format!("expected auto, always or never, got '{}'", other),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

/// Site-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin used for canonical URLs, OG images and the sitemap.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Brand name used in titles and structured data.
    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default)]
    pub color: ColorChoice,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_name: default_site_name(),
            color: ColorChoice::default(),
        }
    }
}

impl SiteConfig {
    /// Keys accepted by [`get_value`](Self::get_value) and
    /// [`set_value`](Self::set_value).
    pub const KEYS: [&'static str; 3] = ["base_url", "site_name", "color"];

    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "base_url" => Ok(self.base_url.clone()),
            "site_name" => Ok(self.site_name.clone()),
            "color" => Ok(self.color.to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a key from its string form, validating the result.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => self.base_url = value.to_string(),
            "site_name" => self.site_name = value.to_string(),
            "color" => self.color = value.parse()?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.validate()
    }

    /// All keys with their current values, in [`KEYS`](Self::KEYS) order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get_value(key).ok().map(|v| (*key, v)))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                reason: format!("must be an absolute http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "site_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Load the effective configuration.
///
/// `project_dir` is the `.sheetmaster/` directory, when one was found. A
/// missing or empty config file contributes nothing. Environment variables
/// always apply.
pub fn load_config(project_dir: Option<&Path>) -> Result<SiteConfig> {
    let config: SiteConfig = file_layers(project_dir)?
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["dir"]))
        .extract()
        .map_err(Box::new)?;
    config.validate()?;
    Ok(config)
}

/// Defaults plus `config.yaml` only. This is what `config set` edits, so
/// environment overrides never leak into the saved file.
pub fn load_file_config(project_dir: &Path) -> Result<SiteConfig> {
    let config: SiteConfig = file_layers(Some(project_dir))?
        .extract()
        .map_err(Box::new)?;
    Ok(config)
}

fn file_layers(project_dir: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(SiteConfig::default()));
    if let Some(dir) = project_dir {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() && !std::fs::read_to_string(&path)?.trim().is_empty() {
            figment = figment.merge(Yaml::file(path));
        }
    }
    Ok(figment)
}

/// Save configuration to `config.yaml` inside the given project directory.
///
/// The directory is created if it does not exist.
pub fn save_config(project_dir: &Path, config: &SiteConfig) -> Result<()> {
    std::fs::create_dir_all(project_dir)?;
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(project_dir.join(CONFIG_FILE), yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
