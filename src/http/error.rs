use actix_web::{HttpResponse, http::StatusCode};
use thiserror::Error;

use super::types::Verdict;

/// Request-level failures of the validation endpoint.
///
/// Resolution outcomes (no `@`, zero MX records, DNS failure) are *not*
/// errors; they travel as `{"valid": false}` with a 200 status. Only a
/// malformed request or an unexpected internal failure lands here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not JSON, or the `email` field is absent or not a string.
    #[error("No email provided")]
    NoEmail,
    /// Catch-all for failures outside the anticipated parse/DNS paths.
    #[error("Server error")]
    Internal,
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoEmail => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Verdict::failure(self.to_string()))
    }
}
