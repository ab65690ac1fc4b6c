//! Startup configuration.
//!
//! Read once from `<config_dir>/penny/config.json` when present. Every key is
//! optional; a missing file yields the defaults, a malformed one is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

use crate::router::PageId;
use crate::theme::ThemeMode;

pub const CONFIG_FILE: &str = "config.json";
pub const APP_DIR: &str = "penny";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    /// Page identifier to open at startup.
    pub start_page: String,
    /// Stand-in latency for payments, syncs and assistant replies.
    pub simulated_delay_ms: u64,
    pub tick_rate_ms: u64,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            start_page: PageId::default().as_str().to_string(),
            simulated_delay_ms: 1_500,
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads the config from the default location, or defaults when absent.
    pub fn load() -> color_eyre::Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> color_eyre::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn start_page(&self) -> PageId {
        PageId::parse_or_default(&self.start_page)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.simulated_delay(), Duration::from_millis(1_500));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "theme": "light", "simulated_delay_ms": 250 }}"#).unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.simulated_delay_ms, 250);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.start_page(), PageId::Dashboard);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn test_unknown_start_page_falls_back() {
        let config = Config {
            start_page: "treasury".into(),
            ..Default::default()
        };
        assert_eq!(config.start_page(), PageId::Dashboard);

        let config = Config {
            start_page: "crossborder".into(),
            ..Default::default()
        };
        assert_eq!(config.start_page(), PageId::CrossBorder);
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }
}
