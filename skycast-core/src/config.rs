use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::units::UnitMode;

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";

/// Optional overrides for the remote services.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Endpoints {
    pub forecast: Option<String>,
    pub geocoding: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// City loaded on startup; the built-in default location when absent.
    pub default_city: Option<String>,

    /// "metric" or "imperial".
    pub units: Option<String>,

    /// Example TOML:
    /// [endpoints]
    /// forecast = "https://api.open-meteo.com/v1/forecast"
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Configured unit system, metric when unset.
    pub fn unit_mode(&self) -> Result<UnitMode> {
        match self.units.as_deref() {
            None => Ok(UnitMode::default()),
            Some(s) => UnitMode::try_from(s).with_context(|| {
                format!(
                    "Invalid `units` in config.\n\
                     Hint: run `skycast configure` or edit {}.",
                    Self::config_file_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| "config.toml".to_string())
                )
            }),
        }
    }

    pub fn set_unit_mode(&mut self, mode: UnitMode) {
        self.units = Some(mode.as_str().to_string());
    }

    /// Store a default city; blank input clears it.
    pub fn set_default_city(&mut self, city: &str) {
        let city = city.trim();
        self.default_city = if city.is_empty() { None } else { Some(city.to_string()) };
    }

    pub fn forecast_url(&self) -> &str {
        self.endpoints.forecast.as_deref().unwrap_or(DEFAULT_FORECAST_URL)
    }

    pub fn geocoding_url(&self) -> &str {
        self.endpoints.geocoding.as_deref().unwrap_or(DEFAULT_GEOCODING_URL)
    }

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
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
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
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_defaults_to_metric_and_public_endpoints() {
        let cfg = Config::default();

        assert_eq!(cfg.unit_mode().unwrap(), UnitMode::Metric);
        assert_eq!(cfg.forecast_url(), DEFAULT_FORECAST_URL);
        assert_eq!(cfg.geocoding_url(), DEFAULT_GEOCODING_URL);
        assert!(cfg.default_city.is_none());
    }

    #[test]
    fn invalid_units_are_reported() {
        let cfg = Config { units: Some("kelvin".into()), ..Config::default() };
        let err = cfg.unit_mode().unwrap_err();

        assert!(format!("{err:#}").contains("Unknown unit system"));
    }

    #[test]
    fn blank_default_city_clears_it() {
        let mut cfg = Config::default();

        cfg.set_default_city("  Tokyo ");
        assert_eq!(cfg.default_city.as_deref(), Some("Tokyo"));

        cfg.set_default_city("   ");
        assert!(cfg.default_city.is_none());
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_default_city("London");
        cfg.set_unit_mode(UnitMode::Imperial);
        cfg.endpoints.forecast = Some("http://localhost:9000/v1/forecast".into());
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.unit_mode().unwrap(), UnitMode::Imperial);
        assert_eq!(loaded.forecast_url(), "http://localhost:9000/v1/forecast");
        assert_eq!(loaded.geocoding_url(), DEFAULT_GEOCODING_URL);
    }

    #[test]
    fn parses_hand_written_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "units = \"imperial\"\n\n[endpoints]\ngeocoding = \"http://geo.local\"\n")
            .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.unit_mode().unwrap(), UnitMode::Imperial);
        assert_eq!(cfg.geocoding_url(), "http://geo.local");
    }
}
