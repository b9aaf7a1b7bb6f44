//! Signed, stateless admin session tokens.
//!
//! A session is a JSON claims document signed with HMAC-SHA256 and carried
//! in an `HttpOnly` cookie. The token is the whole record: there is no
//! server-side session table, so every protected request re-verifies the
//! cookie from scratch.
//!
//! # Wire format
//!
//! ```text
//! base64url( <payload json> "." <hex hmac-sha256 of payload json> )
//! ```
//!
//! The payload JSON may itself contain `.`, so decoding always splits on
//! the *last* separator. The hex signature alphabet never contains `.`,
//! which makes that split unambiguous.
//!
//! # Verification pipeline
//!
//! [`verify_session_token`] composes the steps in order: transport decode
//! and split, signature check, payload parse, then policy (expiry + role).
//! Every failure collapses into a [`SessionRejection`]; nothing in this
//! module panics on attacker-controlled input.

pub mod payload;
pub mod policy;
pub mod signature;
pub mod token;
pub mod verify;

pub use payload::{Role, SessionPayload};
pub use policy::authorize;
pub use signature::{SigningKey, sign, verify_signature};
pub use token::{TOKEN_SEPARATOR, TokenEncodeError, encode_token, split_token};
pub use verify::{SessionRejection, verify_session_token};
