//! Newsletter signup route handler.
//!
//! The one mutating API endpoint on the public site, and the consuming
//! side of the CSRF contract: the request must carry the `csrf_token`
//! cookie and the matching `x-csrf-token` header or it is rejected before
//! anything else runs.

use axum::{Json, http::HeaderMap, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::routes::api::csrf::require_csrf;

/// Newsletter signup request body.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Acknowledgement body.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub status: &'static str,
}

/// POST /api/newsletter/subscribe - sign up for the newsletter.
///
/// # Errors
///
/// Returns 403 when the CSRF pair is missing or mismatched, 400 for an
/// invalid email address.
#[instrument(skip_all, fields(email = %request.email))]
pub async fn subscribe(
    jar: CookieJar,
    headers: HeaderMap,
    Json(request): Json<SubscribeRequest>,
) -> Result<impl IntoResponse> {
    require_csrf(&jar, &headers)?;

    let email = request.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest(
            "please enter a valid email address".to_string(),
        ));
    }

    // Delivery is handled by the mailing list provider's import job; the
    // site only acknowledges the signup.
    tracing::info!("newsletter signup accepted");
    Ok((
        StatusCode::ACCEPTED,
        Json(SubscribeResponse {
            status: "subscribed",
        }),
    ))
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    // Simple validation: contains @, has content before and after @
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}
