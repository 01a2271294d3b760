//! # Console Service Module
//!
//! Endpoints the browser app calls on its own host, as opposed to the remote
//! catalog API it manages.
//!
//! ## Sub-modules:
//! - `get`: Serves the runtime configuration of the console.

mod get;

use actix_web::web::{get, resource};
use actix_web::Resource;
use common::config::CONFIG_PATH;

/// Configures and returns the Actix `Resource` for the console endpoints.
///
/// # Registered Routes:
///
/// *   **`GET /console-config.json`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `ConsoleConfig` the host was started with,
///       most importantly the base URL of the remote API.
pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(get::process))
}
