//! HMAC-SHA256 payload signatures.
//!
//! The signing key wraps the process-wide secret and is constructed once
//! from configuration, then passed in wherever signing or verification
//! happens. An empty key never signs and never verifies: an unconfigured
//! secret must not make every signature trivially "correct".

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::session::token::TokenEncodeError;

type HmacSha256 = Hmac<Sha256>;

/// Server-held secret used to sign and verify session payloads.
///
/// Implements `Debug` manually to redact the secret.
#[derive(Clone)]
pub struct SigningKey {
    secret: SecretString,
}

impl SigningKey {
    /// Wrap a configured secret.
    #[must_use]
    pub const fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Whether the key is unconfigured (empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.expose_secret().is_empty()
    }

    fn bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl From<&str> for SigningKey {
    fn from(secret: &str) -> Self {
        Self::new(SecretString::from(secret.to_owned()))
    }
}

/// Compute the hex HMAC-SHA256 of `data`, or `None` with an empty key.
fn compute(data: &[u8], key: &SigningKey) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    let mut mac = HmacSha256::new_from_slice(key.bytes()).ok()?;
    mac.update(data);
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Sign payload bytes, producing the hex-encoded signature.
///
/// # Errors
///
/// Returns [`TokenEncodeError::UnconfiguredKey`] when the key is empty.
pub fn sign(data: &[u8], key: &SigningKey) -> Result<String, TokenEncodeError> {
    compute(data, key).ok_or(TokenEncodeError::UnconfiguredKey)
}

/// Check a supplied signature against a recomputed one.
///
/// Comparison is constant-time. An empty key rejects everything.
#[must_use]
pub fn verify_signature(data: &[u8], signature: &str, key: &SigningKey) -> bool {
    compute(data, key)
        .is_some_and(|expected| bool::from(expected.as_bytes().ct_eq(signature.as_bytes())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn key() -> SigningKey {
        SigningKey::from("kJ8#mQ2$vN5&xR9!wT3@zB6^cD1*eF4%")
    }

    #[test]
    fn test_sign_then_verify_round_trips() {
        let signature = sign(b"payload bytes", &key()).unwrap();
        assert!(verify_signature(b"payload bytes", &signature, &key()));
    }

    #[test]
    fn test_signature_is_hex_sha256_sized() {
        let signature = sign(b"x", &key()).unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_changed_data_fails_verification() {
        let signature = sign(b"payload bytes", &key()).unwrap();
        assert!(!verify_signature(b"payload byteZ", &signature, &key()));
    }

    #[test]
    fn test_changed_signature_fails_verification() {
        let mut signature = sign(b"payload bytes", &key()).unwrap();
        // Flip one hex digit.
        let last = signature.pop().unwrap();
        signature.push(if last == '0' { '1' } else { '0' });
        assert!(!verify_signature(b"payload bytes", &signature, &key()));
    }

    #[test]
    fn test_different_key_fails_verification() {
        let signature = sign(b"payload bytes", &key()).unwrap();
        let other = SigningKey::from("qW7!eR2@tY5#uI8$oP1%aS4^dF6&gH9*");
        assert!(!verify_signature(b"payload bytes", &signature, &other));
    }

    #[test]
    fn test_empty_key_never_signs() {
        let empty = SigningKey::from("");
        assert!(matches!(
            sign(b"data", &empty),
            Err(TokenEncodeError::UnconfiguredKey)
        ));
    }

    #[test]
    fn test_empty_key_never_verifies() {
        // Even a signature produced under some key must not verify once
        // the server secret is unconfigured.
        let signature = sign(b"data", &key()).unwrap();
        let empty = SigningKey::from("");
        assert!(!verify_signature(b"data", &signature, &empty));
        assert!(!verify_signature(b"data", "", &empty));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let output = format!("{:?}", key());
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("kJ8#"));
    }
}
