//! Integration tests for Driftline.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p driftline-integration-tests
//! ```
//!
//! Tests drive the real router in-process with `tower::ServiceExt::oneshot`
//! against a synthetic configuration: no network, no external services, no
//! real secrets. The router under test is the exact one `main` serves,
//! including the middleware stack.
//!
//! # Test Categories
//!
//! - `admin_gate` - Session gate scenarios for the `/admin` area
//! - `csrf_api` - CSRF issuance and double-submit validation

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use chrono::{Duration, Utc};
use secrecy::SecretString;

use driftline_core::session::{Role, SessionPayload, SigningKey, encode_token};
use driftline_site::config::SiteConfig;
use driftline_site::routes;
use driftline_site::state::AppState;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "mK2@nL5#pQ7&rT0*uW4^zC6!aB3$xY9e";

/// A different secret, for forged-token scenarios.
pub const OTHER_SECRET: &str = "dF6&gH9*jK1!lM4@nP7#qR0$sT3^vW5z";

/// Build a synthetic configuration (http, so cookies are not `Secure`).
#[must_use]
pub fn test_config() -> SiteConfig {
    SiteConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from(TEST_SECRET),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    }
}

/// Build the application router exactly as `main` does.
#[must_use]
pub fn app() -> Router {
    routes::app(AppState::new(test_config()))
}

/// The signing key matching [`TEST_SECRET`].
#[must_use]
pub fn signing_key() -> SigningKey {
    SigningKey::from(TEST_SECRET)
}

/// Mint a token for `role` under `secret`, expiring in one hour.
///
/// # Panics
///
/// Panics if encoding fails, which only happens with an empty secret.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn mint_token(role: Role, secret: &str) -> String {
    let expires_at = (Utc::now() + Duration::hours(1)).timestamp_millis();
    let payload = SessionPayload::new(role).with_expiry(expires_at);
    encode_token(&payload, &SigningKey::from(secret)).unwrap()
}

/// Mint an admin token under the test secret with an explicit deadline.
///
/// # Panics
///
/// Panics if encoding fails, which only happens with an empty secret.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn mint_admin_token_expiring_at(expires_at_ms: i64) -> String {
    let payload = SessionPayload::new(Role::Admin).with_expiry(expires_at_ms);
    encode_token(&payload, &signing_key()).unwrap()
}
