//! CORS middleware configuration for cross-origin requests.
//!
//! The verification endpoints are called from browser frontends on
//! arbitrary origins, so all origins are permitted. `OPTIONS` preflight
//! requests are short-circuited by the middleware with a success
//! response before they reach any handler.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates the CORS middleware for the verification API.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ])
        .max_age(3600)
}
