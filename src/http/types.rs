use serde::{Deserialize, Serialize};

/// Body of `POST /validate`. Not persisted, not mutated after receipt.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub email: String,
}

/// Response body for every outcome. `error` is present only on request or
/// server errors; resolution outcomes carry the bare boolean.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    pub fn from_flag(valid: bool) -> Self {
        Self { valid, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}
