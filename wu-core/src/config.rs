use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Station used when neither the config file nor the command line names one.
pub const DEFAULT_STATION: &str = "KLNK";

/// Endpoint all requests are built on.
pub const DEFAULT_BASE_URL: &str = "http://api.wunderground.com/api";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "0123456789abcdef"
/// station = "Lincoln, NE"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Default station: airport code, zip code, "City, ST" or "LAT,LONG".
    pub station: Option<String>,

    /// Override for the API endpoint, mostly useful for testing.
    pub base_url: Option<String>,
}

/// Configuration after command-line overrides have been applied.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub station: String,
    pub base_url: String,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wu", "wu")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the API key, if one has been configured.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `wu configure` and enter your Weather Underground API key."
                )
            })
    }

    /// Station from the config file, or the built-in default.
    pub fn station_or_default(&self) -> &str {
        self.station
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_STATION)
    }

    /// Applies command-line overrides and checks that a key is present.
    pub fn resolve(&self, station_override: Option<&str>) -> Result<Settings> {
        let api_key = self.api_key()?.to_string();
        let station = station_override
            .unwrap_or_else(|| self.station_or_default())
            .to_string();
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Settings { api_key, station, base_url })
    }
}
