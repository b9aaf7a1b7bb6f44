//! Authorization policy for parsed session payloads.
//!
//! Policy runs only after the signature has been verified; an unsigned or
//! mis-signed token never reaches this check.

use crate::session::payload::{Role, SessionPayload};
use crate::session::verify::SessionRejection;

/// Check that a verified payload authorizes access to the admin area.
///
/// Fails closed: an expired deadline or any role other than `admin`
/// rejects. A payload without a deadline does not expire.
///
/// # Errors
///
/// Returns [`SessionRejection::PolicyViolation`] on expiry or role
/// failure. The two causes are deliberately not distinguished in the
/// error; callers that need detail can inspect the payload themselves.
pub fn authorize(payload: &SessionPayload, now_ms: i64) -> Result<(), SessionRejection> {
    if payload.is_expired(now_ms) {
        return Err(SessionRejection::PolicyViolation);
    }
    if payload.role != Role::Admin {
        return Err(SessionRejection::PolicyViolation);
    }
    Ok(())
}
