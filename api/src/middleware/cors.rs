//! CORS middleware configuration for cross-origin requests.
//!
//! Origins come from [`CorsConfig`]: development allows any origin, other
//! environments only the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use si_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-sharer-user-id"),
        ])
        .max_age(config.max_age);

    if config.allow_any_origin {
        log::info!("Configuring permissive CORS");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
