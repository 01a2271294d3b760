use common::config::{CONFIG_PATH, ConsoleConfig};
use gloo_net::http::Request;

/// Reads the runtime configuration published by the host. When the console is
/// served by a dev server without that endpoint, the API is assumed to share
/// the page's origin.
pub async fn load() -> ConsoleConfig {
    match fetch().await {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("Console config unavailable, using defaults: {err}"));
            ConsoleConfig::default()
        }
    }
}

async fn fetch() -> Result<ConsoleConfig, gloo_net::Error> {
    Request::get(CONFIG_PATH).send().await?.json().await
}
