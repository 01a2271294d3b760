//! Runtime configuration handed from the host binary to the browser app.

use serde::{Deserialize, Serialize};

/// Path the host serves the configuration on.
pub const CONFIG_PATH: &str = "/console-config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Origin of the remote API, e.g. `https://api.example.com`. Empty means
    /// the API is served from the same origin as the console.
    #[serde(default)]
    pub api_base_url: String,
}

impl ConsoleConfig {
    /// Absolute URL of an API path.
    pub fn url(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slashes() {
        let config = ConsoleConfig {
            api_base_url: "https://api.example.com/".into(),
        };
        assert_eq!(config.url("/api/products"), "https://api.example.com/api/products");
        assert_eq!(config.url("vimalabout"), "https://api.example.com/vimalabout");
    }

    #[test]
    fn empty_base_keeps_paths_relative_to_the_origin() {
        assert_eq!(ConsoleConfig::default().url("/api/blogs"), "/api/blogs");
    }

    #[test]
    fn missing_field_decodes_to_default() {
        let config: ConsoleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }
}
