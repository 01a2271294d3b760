//! Host settings read from the environment at startup.
//!
//! | Variable               | Default     |
//! |------------------------|-------------|
//! | `CONSOLE_HOST`         | `127.0.0.1` |
//! | `CONSOLE_PORT`         | `8080`      |
//! | `CONSOLE_API_BASE_URL` | (empty)     |
//! | `CONSOLE_OPEN_BROWSER` | `true`      |

use std::{env, fmt::Display, str::FromStr};

use common::config::ConsoleConfig;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Handed to the browser app on `/console-config.json`.
    pub console: ConsoleConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "CONSOLE_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "CONSOLE_PORT", "8080")?,
            open_browser: try_load(&lookup, "CONSOLE_OPEN_BROWSER", "true")?,
            console: ConsoleConfig {
                api_base_url: try_load(&lookup, "CONSOLE_API_BASE_URL", "")?,
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default:?}");
        default.to_string()
    });
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
        assert_eq!(config.console, ConsoleConfig::default());
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("CONSOLE_PORT", "9000"),
            ("CONSOLE_OPEN_BROWSER", "false"),
            ("CONSOLE_API_BASE_URL", "https://api.example.com"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
        assert_eq!(config.console.api_base_url, "https://api.example.com");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = load(&[("CONSOLE_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("CONSOLE_PORT"));
    }
}
