//! Session token commands.
//!
//! # Usage
//!
//! ```bash
//! # Mint an admin token, good for 24 hours
//! driftline session mint --role admin
//!
//! # Check why a cookie value is being rejected
//! driftline session inspect <token>
//! ```
//!
//! # Environment Variables
//!
//! - `SITE_SESSION_SECRET` - The signing secret the site verifies with.
//!   Minting with any other secret produces tokens the gate rejects.

use chrono::{Duration, Utc};
use driftline_core::session::{
    Role, SessionPayload, SessionRejection, SigningKey, TokenEncodeError, encode_token,
    split_token, verify_session_token,
};
use secrecy::SecretString;
use thiserror::Error;

/// Errors that can occur during session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Token lifetime out of range.
    #[error("Invalid ttl: {0} (must be a positive number of hours)")]
    InvalidTtl(i64),

    /// Token could not be produced.
    #[error("Failed to encode token: {0}")]
    Encode(#[from] TokenEncodeError),

    /// Token failed verification.
    #[error("Token rejected: {0}")]
    Rejected(SessionRejection),
}

/// Mint a signed session token and print it to stdout.
///
/// The printed value goes into the `admin_session` cookie verbatim.
///
/// # Errors
///
/// Returns `SessionError` when the secret is missing or the ttl is
/// not a positive number of hours.
pub fn mint(role: &str, ttl_hours: i64) -> Result<(), SessionError> {
    let key = signing_key()?;

    let lifetime = Duration::try_hours(ttl_hours)
        .filter(|d| *d > Duration::zero())
        .ok_or(SessionError::InvalidTtl(ttl_hours))?;
    let expires_at = (Utc::now() + lifetime).timestamp_millis();

    let payload = SessionPayload::new(Role::from(role.to_owned())).with_expiry(expires_at);
    if payload.role != Role::Admin {
        tracing::warn!("role {role:?} will not pass the admin gate");
    }

    let token = encode_token(&payload, &key)?;
    print_line(&token);
    Ok(())
}

/// Decode and verify a token, printing the payload and the verdict.
///
/// # Errors
///
/// Returns `SessionError::Rejected` when the token fails any
/// verification step; the payload is still printed when it can be
/// recovered, which is usually the point of inspecting.
pub fn inspect(token: &str) -> Result<(), SessionError> {
    let key = signing_key()?;
    let now_ms = Utc::now().timestamp_millis();

    match verify_session_token(token, &key, now_ms) {
        Ok(payload) => {
            print_line(&format!(
                "valid: {}",
                serde_json::to_string_pretty(&payload)
                    .unwrap_or_else(|_| "<unprintable payload>".to_owned())
            ));
            Ok(())
        }
        Err(rejection) => {
            // Show the raw payload when the wire format is intact, so an
            // expired or mis-signed token can still be examined.
            if let Ok((data, _signature)) = split_token(token) {
                print_line(&format!("payload (unverified): {data}"));
            }
            Err(SessionError::Rejected(rejection))
        }
    }
}

/// Load the signing key from the environment.
fn signing_key() -> Result<SigningKey, SessionError> {
    dotenvy::dotenv().ok();

    let secret = std::env::var("SITE_SESSION_SECRET")
        .map_err(|_| SessionError::MissingEnvVar("SITE_SESSION_SECRET"))?;
    Ok(SigningKey::new(SecretString::from(secret)))
}

// Tokens go to stdout so they can be piped; everything else is tracing.
#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
