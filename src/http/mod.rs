//! HTTP surface for the deliverability check.
//!
//! One JSON endpoint, `POST /validate`, plus a `/health` probe. All
//! responses carry permissive cross-origin headers; browser pre-flight
//! OPTIONS requests are answered by the CORS middleware with an empty body
//! before any handler runs.

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use types::{ValidateRequest, Verdict};

use actix_cors::Cors;
use actix_web::http::{Method, header};
use actix_web::web;

/// Registers the service routes on an actix `App`.
///
/// The CORS middleware only intercepts preflight-shaped OPTIONS requests
/// (those carrying `Origin` + `Access-Control-Request-Method`); the explicit
/// OPTIONS route keeps the empty-200 contract for every other OPTIONS call.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::validate)
        .service(handlers::health)
        .route(
            "/validate",
            web::route().method(Method::OPTIONS).to(handlers::options_ok),
        );
}

/// Permissive CORS: any origin, the standard authorization/content-type
/// headers. No credentials, which would be incompatible with any-origin.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

#[cfg(test)]
mod tests;
