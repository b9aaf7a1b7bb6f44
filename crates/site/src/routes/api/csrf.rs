//! CSRF token issuance and the double-submit validation contract.
//!
//! `GET /api/csrf` issues a fresh random token twice: as an `HttpOnly`
//! cookie and in the JSON body. The client mirrors the body value into the
//! `x-csrf-token` header on subsequent mutating calls; handlers then call
//! [`require_csrf`] to check that cookie and header are byte-equal. A
//! cross-origin attacker can force the cookie to be sent but cannot read
//! the body, so it cannot produce the matching header.
//!
//! Issuing is unauthenticated by design - the token is a nonce, not a
//! privilege. Each bootstrap call supersedes the previous cookie; there is
//! no server-side token registry and nothing to revoke.

use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::TryRngCore;
use rand::rngs::OsRng;
use serde::Serialize;
use subtle::ConstantTimeEq;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cookie holding the server-issued CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrf_token";

/// Header the client echoes the token back in.
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";

/// Random bytes per token (256 bits before encoding).
const CSRF_TOKEN_BYTES: usize = 32;

/// Cookie lifetime. A newer bootstrap call overwrites the cookie sooner.
const CSRF_TOKEN_TTL_HOURS: i64 = 24;

/// Body of the bootstrap response.
#[derive(Debug, Serialize)]
pub struct CsrfToken {
    pub token: String,
}

/// GET /api/csrf - issue a fresh CSRF token.
///
/// Sets the `csrf_token` cookie and returns the same value in the body.
///
/// # Errors
///
/// Returns a 500 if the system random source fails: a missing token would
/// silently disable CSRF protection, so issuance never degrades.
#[instrument(skip_all)]
pub async fn issue(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse> {
    let token = generate_token()?;
    let cookie = build_csrf_cookie(token.clone(), state.config().is_secure());
    Ok((jar.add(cookie), Json(CsrfToken { token })))
}

/// Validate the double-submit pair on a mutating request.
///
/// Both the `csrf_token` cookie and the `x-csrf-token` header must be
/// present and byte-equal (constant-time). Everything else rejects.
///
/// # Errors
///
/// Returns [`AppError::CsrfRejected`] on any missing or mismatched value.
pub fn require_csrf(jar: &CookieJar, headers: &HeaderMap) -> Result<()> {
    let cookie = jar
        .get(CSRF_COOKIE_NAME)
        .map(Cookie::value)
        .ok_or(AppError::CsrfRejected)?;
    let header = headers
        .get(CSRF_HEADER_NAME)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::CsrfRejected)?;

    if cookie.is_empty() || !bool::from(cookie.as_bytes().ct_eq(header.as_bytes())) {
        return Err(AppError::CsrfRejected);
    }
    Ok(())
}

/// Generate an unguessable token from the OS random source.
fn generate_token() -> Result<String> {
    let mut bytes = [0u8; CSRF_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AppError::Internal(format!("random source unavailable: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Build the CSRF cookie with the required attributes.
fn build_csrf_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((CSRF_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::hours(CSRF_TOKEN_TTL_HOURS))
        .build()
}
