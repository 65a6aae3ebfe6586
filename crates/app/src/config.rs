use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Portal settings read from the workspace `config.toml`, parsed on first use.
pub fn portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| PortalConfig::from_toml_or_default(include_str!("../../../config.toml")))
}
