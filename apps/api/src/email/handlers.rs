use axum::Json;
use serde::{Deserialize, Serialize};

use crate::email::{get_duplicate_check_key, validate};
use crate::errors::AppError;

#[derive(Deserialize)]
pub struct EmailCheckRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct EmailCheckResponse {
    pub success: bool,
    /// Normalized form, the key the registration flow uses to detect
    /// already-registered duplicates.
    pub email: String,
}

/// POST /api/account/email-check
/// Registration precheck: rejects malformed and disposable addresses and
/// returns the duplicate-check key for the rest.
pub async fn handle_email_check(
    Json(req): Json<EmailCheckRequest>,
) -> Result<Json<EmailCheckResponse>, AppError> {
    validate(&req.email)?;
    Ok(Json(EmailCheckResponse {
        success: true,
        email: get_duplicate_check_key(&req.email),
    }))
}
