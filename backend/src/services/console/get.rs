//! Handler for `GET /console-config.json`.
//!
//! The browser app fetches this once on startup. The value is read from the
//! environment when the host starts and shared through `web::Data`.

use actix_web::{web, HttpResponse, Responder};
use common::config::ConsoleConfig;
use log::debug;

pub async fn process(config: web::Data<ConsoleConfig>) -> impl Responder {
    debug!("Serving console config (api base: {:?})", config.api_base_url);
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use common::config::{ConsoleConfig, CONFIG_PATH};

    use super::*;

    #[actix_web::test]
    async fn returns_the_configured_api_base() {
        let config = ConsoleConfig {
            api_base_url: "https://api.example.com".into(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(crate::services::console::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri(CONFIG_PATH).to_request();
        let body: ConsoleConfig = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, config);
    }
}
