//! Startup configuration, read from a JSON file.
//!
//! Every field has a default, so an empty object (or no file at all) is a
//! valid configuration.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use songcraft_core::reference::DEFAULT_DURATION_SECS;
use songcraft_core::Key;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "SONGCRAFT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SongcraftConfig {
    /// Key the chord reference opens in
    pub default_key: String,
    pub use_sevenths: bool,
    pub genre_filter: Option<String>,
    /// JSON array of writing prompts; the built-in list is used when absent
    pub prompts_path: Option<PathBuf>,
    pub writing_duration_secs: u32,
    /// error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for SongcraftConfig {
    fn default() -> Self {
        SongcraftConfig {
            default_key: "C".to_string(),
            use_sevenths: false,
            genre_filter: None,
            prompts_path: None,
            writing_duration_secs: DEFAULT_DURATION_SECS,
            log_level: "warn".to_string(),
        }
    }
}

impl SongcraftConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SongcraftConfig =
            serde_json::from_str(json).context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or return the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("in config file {}", path.display()))?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.key()?;
        if self.writing_duration_secs == 0 {
            return Err(anyhow!("writing_duration_secs must be greater than 0"));
        }
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow!("unknown log_level: {}", self.log_level))?;
        Ok(())
    }

    pub fn key(&self) -> Result<Key> {
        self.default_key
            .parse()
            .with_context(|| format!("invalid default_key: {}", self.default_key))
    }
}

/// Config path from `--config <path>` or `SONGCRAFT_CONFIG`, command line first
pub fn config_path<I: IntoIterator<Item = String>>(args: I) -> Option<PathBuf> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    std::env::var_os(CONFIG_ENV).map(PathBuf::from)
}
