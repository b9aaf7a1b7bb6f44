//! Admin session gate.
//!
//! Runs before every handler under `/admin/*` (the bare `/admin` login
//! page is not gated - it is where rejected requests land). The gate
//! decision is final before any page logic runs: no protected response
//! body is produced until the cookie has been verified.
//!
//! Outcomes:
//! - no session cookie: redirect to the login page; nothing to clear, so
//!   the response sets no cookie
//! - cookie present but malformed, mis-signed, unparseable, expired, or
//!   not an admin: redirect to the login page *and* delete the cookie, so
//!   the browser stops replaying a known-bad value
//! - verified admin session: the request proceeds unmodified
//!
//! The rejection reason is logged at debug level only; the response is
//! identical for every failure mode.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Utc;

use driftline_core::session::verify_session_token;

use crate::state::AppState;

/// Cookie holding the signed admin session token.
pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Where rejected requests are sent.
pub const LOGIN_PATH: &str = "/admin";

/// Verify the admin session cookie before running the inner handler.
pub async fn admin_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let Some(cookie) = jar.get(SESSION_COOKIE_NAME) else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    let now_ms = Utc::now().timestamp_millis();
    match verify_session_token(cookie.value(), state.signing_key(), now_ms) {
        Ok(_session) => next.run(request).await,
        Err(reason) => {
            tracing::debug!(%reason, "rejected admin session cookie");
            (clear_session(jar), Redirect::to(LOGIN_PATH)).into_response()
        }
    }
}

/// Add a removal cookie for the session to the jar.
///
/// The removal must carry the same path as the original cookie or the
/// browser keeps the stale value.
fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build())
}
