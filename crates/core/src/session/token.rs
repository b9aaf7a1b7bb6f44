//! Session token wire codec.
//!
//! A token is `base64url(<payload json> "." <hex signature>)` without
//! padding, so the value is cookie-safe as-is. Decoding splits on the
//! *last* `.`: the payload JSON may legitimately contain the separator,
//! the hex signature cannot.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

use crate::session::payload::SessionPayload;
use crate::session::signature::{SigningKey, sign};
use crate::session::verify::SessionRejection;

/// Separator between the serialized payload and its signature.
pub const TOKEN_SEPARATOR: char = '.';

/// Errors producing a signed token.
///
/// Encoding is the producer side (login tooling); the verifying side
/// reports [`SessionRejection`] instead.
#[derive(Debug, Error)]
pub enum TokenEncodeError {
    /// The payload did not serialize to JSON.
    #[error("failed to serialize session payload: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The signing key is empty/unconfigured.
    #[error("signing key is not configured")]
    UnconfiguredKey,
}

/// Serialize, sign, and transport-encode a session payload.
///
/// # Errors
///
/// Returns [`TokenEncodeError`] if serialization fails or the key is
/// unconfigured.
pub fn encode_token(payload: &SessionPayload, key: &SigningKey) -> Result<String, TokenEncodeError> {
    let data = serde_json::to_string(payload)?;
    let signature = sign(data.as_bytes(), key)?;
    Ok(URL_SAFE_NO_PAD.encode(format!("{data}{TOKEN_SEPARATOR}{signature}")))
}

/// Transport-decode a token and split it into payload and signature.
///
/// Splits on the last occurrence of [`TOKEN_SEPARATOR`].
///
/// # Errors
///
/// Returns [`SessionRejection::MalformedToken`] when the token is not
/// valid base64, not UTF-8, has no separator, or either segment is empty.
pub fn split_token(token: &str) -> Result<(String, String), SessionRejection> {
    let raw = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| SessionRejection::MalformedToken)?;
    let raw = String::from_utf8(raw).map_err(|_| SessionRejection::MalformedToken)?;

    let (data, signature) = raw
        .rsplit_once(TOKEN_SEPARATOR)
        .ok_or(SessionRejection::MalformedToken)?;
    if data.is_empty() || signature.is_empty() {
        return Err(SessionRejection::MalformedToken);
    }

    Ok((data.to_owned(), signature.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::payload::Role;

    fn key() -> SigningKey {
        SigningKey::from("kJ8#mQ2$vN5&xR9!wT3@zB6^cD1*eF4%")
    }

    #[test]
    fn test_encode_then_split_round_trips() {
        let payload = SessionPayload::new(Role::Admin).with_expiry(42);
        let token = encode_token(&payload, &key()).unwrap();

        let (data, signature) = split_token(&token).unwrap();
        let decoded: SessionPayload = serde_json::from_str(&data).unwrap();
        assert_eq!(decoded, payload);
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_split_uses_last_separator() {
        // Payload JSON containing dots must not confuse the split.
        let payload = SessionPayload::new(Role::Admin)
            .with_claim("site", serde_json::json!("driftline.studio"));
        let token = encode_token(&payload, &key()).unwrap();

        let (data, signature) = split_token(&token).unwrap();
        assert!(data.contains("driftline.studio"));
        assert!(!signature.contains(TOKEN_SEPARATOR));
    }

    #[test]
    fn test_token_is_cookie_safe() {
        let payload = SessionPayload::new(Role::Admin).with_expiry(1_700_000_000_000);
        let token = encode_token(&payload, &key()).unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_split_rejects_invalid_base64() {
        assert_eq!(
            split_token("not%base64!").unwrap_err(),
            SessionRejection::MalformedToken
        );
    }

    #[test]
    fn test_split_rejects_missing_separator() {
        let token = URL_SAFE_NO_PAD.encode("no separator here");
        assert_eq!(
            split_token(&token).unwrap_err(),
            SessionRejection::MalformedToken
        );
    }

    #[test]
    fn test_split_rejects_empty_segments() {
        for raw in [".signature", "data.", "."] {
            let token = URL_SAFE_NO_PAD.encode(raw);
            assert_eq!(
                split_token(&token).unwrap_err(),
                SessionRejection::MalformedToken,
                "raw form {raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_split_rejects_non_utf8() {
        let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe, b'.', b'a']);
        assert_eq!(
            split_token(&token).unwrap_err(),
            SessionRejection::MalformedToken
        );
    }

    #[test]
    fn test_encode_with_empty_key_fails() {
        let payload = SessionPayload::new(Role::Admin);
        let empty = SigningKey::from("");
        assert!(matches!(
            encode_token(&payload, &empty),
            Err(TokenEncodeError::UnconfiguredKey)
        ));
    }
}
