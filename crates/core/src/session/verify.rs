//! Composed token verification.
//!
//! This is the function the admin gate calls on every protected request.
//! It is pure: the same (token, key, now) always produces the same result,
//! and verifying a token has no side effects.

use thiserror::Error;

use crate::session::payload::SessionPayload;
use crate::session::policy::authorize;
use crate::session::signature::{SigningKey, verify_signature};
use crate::session::token::split_token;

/// Why a session token was rejected.
///
/// All variants collapse to the same externally observable outcome
/// (redirect to login, cookie cleared); the distinction exists for logs
/// and tests, never for responses, so rejection cannot be used as an
/// oracle by someone probing forged tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionRejection {
    /// Transport decoding or separator splitting failed.
    #[error("token is not a well-formed signed token")]
    MalformedToken,
    /// Recomputed HMAC does not match, or the key is unconfigured.
    #[error("token signature does not match")]
    SignatureMismatch,
    /// Payload bytes do not parse into a session document.
    #[error("token payload does not parse")]
    PayloadParse,
    /// Payload parsed but failed the expiry or role check.
    #[error("session fails the authorization policy")]
    PolicyViolation,
}

/// Verify a session token end to end and return its payload.
///
/// Steps, in order: transport decode and last-separator split, signature
/// verification over the raw payload bytes, payload parse, policy check.
/// Policy runs last so a forged token never gets a policy verdict.
///
/// # Errors
///
/// Returns the first [`SessionRejection`] encountered. Never panics on
/// malformed input.
pub fn verify_session_token(
    token: &str,
    key: &SigningKey,
    now_ms: i64,
) -> Result<SessionPayload, SessionRejection> {
    let (data, signature) = split_token(token)?;

    if !verify_signature(data.as_bytes(), &signature, key) {
        return Err(SessionRejection::SignatureMismatch);
    }

    let payload: SessionPayload =
        serde_json::from_str(&data).map_err(|_| SessionRejection::PayloadParse)?;

    authorize(&payload, now_ms)?;
    Ok(payload)
}
