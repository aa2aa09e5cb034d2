use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variables that override the config file.
pub const ENV_URL: &str = "DESTISHARE_URL";
pub const ENV_API_KEY: &str = "DESTISHARE_API_KEY";

/// Resolved connection settings for the hosted store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub api_key: String,
}

/// On-disk shape of the config file. Both fields optional so a partially
/// written file still loads and the env vars can fill the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,
}

impl ConfigFile {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config file {}", path.display()))?;
        Ok(())
    }
}

impl Config {
    /// Resolve settings from the config file plus env var overrides.
    ///
    /// Priority per field: environment variable, then config file. Missing
    /// either field is an error pointing at `destishare init`.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(explicit_path)?;
        let file = ConfigFile::load_from(&path)?;
        Self::from_sources(file, std::env::var(ENV_URL).ok(), std::env::var(ENV_API_KEY).ok())
    }

    pub fn from_sources(
        file: ConfigFile,
        env_url: Option<String>,
        env_api_key: Option<String>,
    ) -> Result<Self> {
        let url = env_url.or(file.url).ok_or_else(|| {
            anyhow!("No store URL configured. Run 'destishare init --url <URL> --api-key <KEY>'")
        })?;
        let api_key = env_api_key.or(file.api_key).ok_or_else(|| {
            anyhow!("No api key configured. Run 'destishare init --url <URL> --api-key <KEY>'")
        })?;

        Ok(Self { url, api_key })
    }
}

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path
/// 2. Platform config directory (`<config_dir>/destishare/config.toml`)
/// 3. ~/.destishare/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("destishare").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".destishare").join("config.toml"));
    }

    Err(anyhow!(
        "Could not determine config path: no HOME directory or config directory found"
    ))
}
