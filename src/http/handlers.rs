use actix_web::{HttpResponse, get, post, web};
use serde_json::json;
use tracing::debug;

use super::error::ApiError;
use super::types::{ValidateRequest, Verdict};
use crate::check;
use crate::mx::LookupMx;

/// `POST /validate` — does the address's domain accept mail?
///
/// The body is parsed by hand rather than through `web::Json` so that every
/// malformed payload maps to the same 400 verdict instead of actix's
/// default error body.
#[post("/validate")]
pub async fn validate(
    resolver: web::Data<dyn LookupMx>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request: ValidateRequest = serde_json::from_slice(&body).map_err(|err| {
        debug!(%err, "rejecting unparsable validate payload");
        ApiError::NoEmail
    })?;

    let valid = check::email_has_mx(resolver.get_ref(), &request.email).await;
    Ok(HttpResponse::Ok().json(Verdict::from_flag(valid)))
}

/// `OPTIONS /validate` outside a browser preflight. Same contract: empty
/// body, nothing processed.
pub async fn options_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Liveness probe for load balancers. Not part of the validation contract.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "mxcheck",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
