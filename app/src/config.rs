//! Command-line and environment configuration for the `adprice` binary.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::currency::Locale;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7133/";

#[derive(Debug, Parser)]
#[command(name = "adprice")]
#[command(about = "Terminal client for the ad pricing service")]
#[command(version)]
pub struct Cli {
    /// Base address of the ad pricing API
    #[arg(long, env = "ADPRICE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Locale for currency display and threshold input (en-US or ru-RU)
    #[arg(long, env = "ADPRICE_LOCALE", default_value = "en-US")]
    pub locale: Locale,

    /// Timeout for each whole request, in seconds
    #[arg(long, env = "ADPRICE_TIMEOUT_SECS", default_value_t = 100)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub locale: Locale,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base URL {0:?} must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

impl TryFrom<Cli> for AppConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let base_url = cli.base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        if cli.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            base_url,
            locale: cli.locale,
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("adprice").chain(args.iter().copied())).unwrap();
        AppConfig::try_from(cli)
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--base-url",
            "http://127.0.0.1:3000",
            "--locale",
            "ru-RU",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.locale, Locale::RuRu);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = parse(&["--base-url", "localhost:7133"]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("localhost:7133".to_string()));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = parse(&["--base-url", "http://h", "--timeout-secs", "0"]).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }

    #[test]
    fn unknown_locale_is_a_usage_error() {
        let result = Cli::try_parse_from(["adprice", "--locale", "de-DE"]);
        assert!(result.is_err());
    }
}
