use serde::{Deserialize, Serialize};

/// Storage key used when the config file does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "cruise_user";

/// Brand shown in headers when the config file does not name one.
pub const DEFAULT_BRAND: &str = "Ocean Star Cruises";

/// Feature flags controlling optional parts of the portal UI.
///
/// Every field has a default so that a missing or incomplete config file
/// still produces a working portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// List the demo accounts under the login form.
    #[serde(default = "default_true")]
    pub demo_credentials: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            demo_credentials: true,
        }
    }
}

/// Branding and session persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalSettings {
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Key of the single persisted session record.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            storage_key: default_storage_key(),
        }
    }
}

/// Log verbosity, applied once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level, falling back to `info` for unknown values.
    pub fn tracing_level(&self) -> tracing::Level {
        match self.level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub portal: PortalSettings,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortalConfig {
    /// Parse config text; unparseable input yields defaults and a warning.
    pub fn from_toml_or_default(contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("config.toml could not be parsed ({e}); using defaults");
                Self::default()
            }
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_level() -> String {
    "info".to_string()
}
