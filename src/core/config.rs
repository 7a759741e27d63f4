//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.actiondeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Tab;
use crate::api::client::DEFAULT_BASE_URL;
use crate::core::filter::DEFAULT_NAMES;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_tab: Option<Tab>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub posts_limit: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FilterConfig {
    pub names: Option<Vec<String>>,
}

/// Values taken from CLI flags (None = flag not given).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub tab: Option<Tab>,
    pub base_url: Option<String>,
    pub posts_limit: Option<u8>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POSTS_LIMIT: u8 = 3;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    pub base_url: String,
    pub posts_limit: u8,
    pub filter_names: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.actiondeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".actiondeck").join("config.toml"))
}

/// Load config from `~/.actiondeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DeckConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DeckConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DeckConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# ActionDeck Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_tab = "users"              # "users", "posts", or "filter" (or ACTIONDECK_TAB)

# [api]
# base_url = "https://jsonplaceholder.typicode.com"   # Or set ACTIONDECK_BASE_URL
# posts_limit = 3

# [filter]
# names = ["Alice", "Bob", "Charlie", "David"]
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &DeckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Tab: CLI → env → config → default
    let start_tab = cli
        .tab
        .or_else(|| {
            env("ACTIONDECK_TAB").and_then(|name| {
                let tab = Tab::from_name(&name);
                if tab.is_none() {
                    warn!("Ignoring unknown ACTIONDECK_TAB value: {:?}", name);
                }
                tab
            })
        })
        .or(config.general.default_tab)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("ACTIONDECK_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // A zero limit would make the posts widget pointless
    let posts_limit = cli
        .posts_limit
        .or(config.api.posts_limit)
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_POSTS_LIMIT);

    let filter_names = config
        .filter
        .names
        .clone()
        .unwrap_or_else(|| DEFAULT_NAMES.iter().map(|s| s.to_string()).collect());

    ResolvedConfig {
        start_tab,
        base_url,
        posts_limit,
        filter_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&DeckConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_tab, Tab::Users);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.posts_limit, DEFAULT_POSTS_LIMIT);
        assert_eq!(resolved.filter_names, vec!["Alice", "Bob", "Charlie", "David"]);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DeckConfig {
            general: GeneralConfig {
                default_tab: Some(Tab::Filter),
            },
            api: ApiConfig {
                base_url: Some("http://localhost:3000".to_string()),
                posts_limit: Some(5),
            },
            filter: FilterConfig {
                names: Some(vec!["Zed".to_string()]),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_tab, Tab::Filter);
        assert_eq!(resolved.base_url, "http://localhost:3000");
        assert_eq!(resolved.posts_limit, 5);
        assert_eq!(resolved.filter_names, vec!["Zed"]);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = DeckConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                posts_limit: None,
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "ACTIONDECK_BASE_URL" => Some("http://from-env".to_string()),
            "ACTIONDECK_TAB" => Some("posts".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.start_tab, Tab::Posts);

        let cli = CliOverrides {
            tab: Some(Tab::Filter),
            base_url: Some("http://from-cli".to_string()),
            posts_limit: Some(9),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.start_tab, Tab::Filter);
        assert_eq!(resolved.posts_limit, 9);
    }

    #[test]
    fn test_unknown_env_tab_falls_through() {
        let env = |key: &str| (key == "ACTIONDECK_TAB").then(|| "settings".to_string());
        let resolved = resolve_with_env(&DeckConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.start_tab, Tab::Users);
    }

    #[test]
    fn test_zero_posts_limit_ignored() {
        let cli = CliOverrides {
            posts_limit: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&DeckConfig::default(), &cli, no_env);
        assert_eq!(resolved.posts_limit, DEFAULT_POSTS_LIMIT);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[api]
posts_limit = 4
"#;
        let config: DeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.posts_limit, Some(4));
        assert!(config.api.base_url.is_none());
        assert!(config.general.default_tab.is_none());
        assert!(config.filter.names.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
default_tab = "posts"

[api]
base_url = "http://192.168.1.100:3000"
posts_limit = 10

[filter]
names = ["Ann", "Ben"]
"#;
        let config: DeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_tab, Some(Tab::Posts));
        assert_eq!(config.api.base_url.as_deref(), Some("http://192.168.1.100:3000"));
        assert_eq!(config.filter.names.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_bad_tab_in_toml_is_parse_error() {
        let result: Result<DeckConfig, _> = toml::from_str("[general]\ndefault_tab = \"nope\"\n");
        assert!(result.is_err());
    }
}
