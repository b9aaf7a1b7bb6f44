//! Session payload model.
//!
//! The payload is a small JSON claims document. Only `role` and
//! `expiresAt` are interpreted here; any other claims a producer attaches
//! are carried through opaquely so tokens round-trip unchanged.

use serde::{Deserialize, Serialize};

/// Authorization tier carried in a session payload.
///
/// Only [`Role::Admin`] is authorized for the admin area. Unknown role
/// strings are preserved (not rejected at parse time) so that a payload
/// with an unrecognized role still parses and then fails *policy*, keeping
/// the rejection taxonomy accurate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Full access to the admin area.
    Admin,
    /// Any other role value, kept verbatim for round-tripping.
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        if value == "admin" {
            Self::Admin
        } else {
            Self::Other(value)
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "admin".to_owned(),
            Role::Other(value) => value,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Other(value) => f.write_str(value),
        }
    }
}

/// Claims carried by a signed session token.
///
/// Serialization is canonical: struct fields serialize in declaration
/// order and the flattened extra claims use `serde_json`'s sorted map, so
/// the same logical payload always produces the same bytes. Signature
/// verification depends on that determinism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// Authorization tier.
    pub role: Role,
    /// Absolute expiry deadline in milliseconds since the Unix epoch.
    /// Absent means the token does not expire.
    #[serde(
        rename = "expiresAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<i64>,
    /// Opaque claims not interpreted by the session layer.
    #[serde(flatten)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

impl SessionPayload {
    /// Create a payload with the given role and no expiry.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            expires_at: None,
            claims: serde_json::Map::new(),
        }
    }

    /// Set the absolute expiry deadline (milliseconds since epoch).
    #[must_use]
    pub const fn with_expiry(mut self, expires_at_ms: i64) -> Self {
        self.expires_at = Some(expires_at_ms);
        self
    }

    /// Attach an opaque claim.
    #[must_use]
    pub fn with_claim(mut self, key: &str, value: serde_json::Value) -> Self {
        self.claims.insert(key.to_owned(), value);
        self
    }

    /// Whether the payload is past its deadline at `now_ms`.
    ///
    /// The comparison is strictly `now > expiresAt`: a token is still
    /// valid at the exact expiry instant. A payload without a deadline
    /// never expires.
    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at.is_some_and(|deadline| now_ms > deadline)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_admin() {
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_role_preserves_unknown_values() {
        let role: Role = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, Role::Other("editor".to_owned()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"editor\"");
    }

    #[test]
    fn test_payload_serialization_is_deterministic() {
        let a = SessionPayload::new(Role::Admin)
            .with_expiry(1_700_000_000_000)
            .with_claim("zeta", serde_json::json!(1))
            .with_claim("alpha", serde_json::json!("x"));
        let b = SessionPayload::new(Role::Admin)
            .with_expiry(1_700_000_000_000)
            .with_claim("alpha", serde_json::json!("x"))
            .with_claim("zeta", serde_json::json!(1));

        // Same logical payload, different insertion order, same bytes.
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_payload_without_expiry_omits_field() {
        let payload = SessionPayload::new(Role::Admin);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("expiresAt"));
    }

    #[test]
    fn test_payload_round_trips_opaque_claims() {
        let json = r#"{"role":"admin","expiresAt":123,"issuedBy":"login","n":4}"#;
        let payload: SessionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.role, Role::Admin);
        assert_eq!(payload.expires_at, Some(123));
        assert_eq!(payload.claims.get("issuedBy").unwrap(), "login");

        let back = serde_json::to_string(&payload).unwrap();
        let reparsed: SessionPayload = serde_json::from_str(&back).unwrap();
        assert_eq!(payload, reparsed);
    }

    #[test]
    fn test_expiry_boundary_is_strict() {
        let payload = SessionPayload::new(Role::Admin).with_expiry(1_000);
        assert!(!payload.is_expired(999));
        assert!(!payload.is_expired(1_000));
        assert!(payload.is_expired(1_001));
    }

    #[test]
    fn test_missing_expiry_never_expires() {
        let payload = SessionPayload::new(Role::Admin);
        assert!(!payload.is_expired(i64::MAX));
    }
}
