use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Shipped so the panel works out of the box; a real deployment should
/// override it via the config file or environment.
const DEFAULT_API_KEY: &str = "b6907d289e10d714a6e88b30761fae22";

/// Environment variable that takes precedence over the stored key.
const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

fn default_country_code() -> String {
    "bd".to_string()
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Stored OpenWeather API key, if the user configured one.
    pub api_key: Option<String>,

    /// Country code appended to every location query.
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Provider endpoint root. Overridable so tests can point the
    /// client at a local server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            country_code: default_country_code(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Resolve the provider credential: environment variable first, then
    /// the stored key, then the built-in default.
    pub fn api_key(&self) -> String {
        resolve_api_key(env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "abhawa", "abhawa")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn resolve_api_key(env_key: Option<String>, stored: Option<&str>) -> String {
    env_key
        .filter(|key| !key.is_empty())
        .or_else(|| stored.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_key_wins() {
        let key = resolve_api_key(Some("ENV_KEY".into()), Some("STORED_KEY"));
        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn empty_environment_key_is_ignored() {
        let key = resolve_api_key(Some(String::new()), Some("STORED_KEY"));
        assert_eq!(key, "STORED_KEY");
    }

    #[test]
    fn stored_key_beats_the_default() {
        let key = resolve_api_key(None, Some("STORED_KEY"));
        assert_eq!(key, "STORED_KEY");
    }

    #[test]
    fn falls_back_to_the_builtin_key() {
        let key = resolve_api_key(None, None);
        assert_eq!(key, DEFAULT_API_KEY);
    }

    #[test]
    fn defaults_cover_country_and_base_url() {
        let cfg = Config::default();
        assert_eq!(cfg.country_code, "bd");
        assert!(cfg.base_url.starts_with("https://api.openweathermap.org"));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("api_key = \"MY_KEY\"").expect("valid toml");
        assert_eq!(cfg.api_key.as_deref(), Some("MY_KEY"));
        assert_eq!(cfg.country_code, "bd");
        assert_eq!(cfg.base_url, default_base_url());
    }

    #[test]
    fn toml_roundtrip_preserves_fields() {
        let mut cfg = Config::default();
        cfg.set_api_key("MY_KEY".to_string());

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");

        assert_eq!(back.api_key.as_deref(), Some("MY_KEY"));
        assert_eq!(back.country_code, cfg.country_code);
        assert_eq!(back.base_url, cfg.base_url);
    }
}
