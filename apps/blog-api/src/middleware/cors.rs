//! Cross-origin policy for the browser frontend.

use actix_cors::Cors;
use actix_web::http::{Method, header};

use crate::config::CorsConfig;

/// Build the CORS middleware: listed origins only, cookies allowed.
pub fn cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600);

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
