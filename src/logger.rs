//! Logging setup: `env_logger` writing to stderr.
//!
//! `SONGCRAFT_LOG` takes env_logger filter syntax (`debug`,
//! `songcraft_core=trace`) and overrides the configured level.

use anyhow::{Context, Result};
use env_logger::{Builder, Env};

/// Environment variable that overrides the configured level
pub const LOG_ENV: &str = "SONGCRAFT_LOG";

/// Logger builder filtered by `SONGCRAFT_LOG`, falling back to `configured`
pub fn builder(configured: &str) -> Builder {
    builder_with_env(LOG_ENV, configured)
}

fn builder_with_env(var: &str, configured: &str) -> Builder {
    let mut builder = Builder::from_env(Env::new().filter_or(var, configured));
    builder.format_timestamp(None);
    builder
}

/// Install the global logger; fails if one is already installed
pub fn init(configured: &str) -> Result<()> {
    builder(configured)
        .try_init()
        .context("failed to install logger")
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_configured_level_is_the_fallback() {
        let logger = builder_with_env("SONGCRAFT_TEST_LOG_UNSET", "debug").build();
        assert_eq!(logger.filter(), LevelFilter::Debug);

        let logger = builder_with_env("SONGCRAFT_TEST_LOG_UNSET", "warn").build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_environment_overrides_config() {
        std::env::set_var("SONGCRAFT_TEST_LOG_OVERRIDE", "songcraft_core=trace");
        let logger = builder_with_env("SONGCRAFT_TEST_LOG_OVERRIDE", "warn").build();
        assert_eq!(logger.filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_second_init_fails() {
        assert!(init("error").is_ok());
        assert!(init("error").is_err());
    }
}
