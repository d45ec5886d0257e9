//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.zelig/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ZeligConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JournalConfig {
    pub notes_path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub notes_path: PathBuf,
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

/// Returns the path to `~/.zelig/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".zelig").join("config.toml"))
}

/// Load config from `~/.zelig/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ZeligConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ZeligConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ZeligConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ZeligConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ZeligConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &std::path::Path) {
    let template = "\
# Zelig configuration
#
# All entries are optional; commented values show the defaults.

[api]
# base_url = \"http://127.0.0.1:8001\"

[journal]
# notes_path = \"~/.zelig/notes.json\"
";
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Could not create config directory: {e}");
        return;
    }
    if let Err(e) = fs::write(path, template) {
        warn!("Could not write default config: {e}");
    }
}

/// Resolve the final configuration.
///
/// Precedence, lowest to highest: built-in defaults, the config file,
/// `ZELIG_API_URL` (passed in by the caller), then the CLI `--base-url`
/// flag.
pub fn resolve(
    config: ZeligConfig,
    env_base_url: Option<String>,
    cli_base_url: Option<String>,
) -> ResolvedConfig {
    let base_url = cli_base_url
        .or(env_base_url)
        .or(config.api.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let notes_path = config
        .journal
        .notes_path
        .map(PathBuf::from)
        .or_else(crate::core::journal::default_notes_path)
        .unwrap_or_else(|| PathBuf::from("zelig-notes.json"));

    ResolvedConfig {
        base_url,
        notes_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve(ZeligConfig::default(), None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_flag_wins_over_file() {
        let config = ZeligConfig {
            api: ApiConfig {
                base_url: Some("http://from-file:9000".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(
            config,
            Some("http://from-env:9002".to_string()),
            Some("http://from-cli:9001".to_string()),
        );
        assert_eq!(resolved.base_url, "http://from-cli:9001");
    }

    #[test]
    fn test_file_value_used_without_overrides() {
        let config = ZeligConfig {
            api: ApiConfig {
                base_url: Some("http://from-file:9000".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(config, None, None);
        assert_eq!(resolved.base_url, "http://from-file:9000");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: ZeligConfig = toml::from_str("[api]\nbase_url = \"http://x:1\"\n").unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://x:1"));
        assert!(config.journal.notes_path.is_none());
    }
}
