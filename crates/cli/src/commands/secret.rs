//! Signing secret generation.
//!
//! Produces a secret that passes the site's startup validation (length,
//! entropy, no placeholder patterns): 48 random bytes, base64url-encoded
//! to 64 characters.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

const SECRET_BYTES: usize = 48;

/// Errors that can occur during secret generation.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The OS random source failed.
    #[error("Random source unavailable: {0}")]
    Rng(String),
}

/// Generate a signing secret and print it to stdout.
///
/// # Errors
///
/// Returns `SecretError::Rng` if the OS random source fails.
pub fn generate() -> Result<(), SecretError> {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| SecretError::Rng(e.to_string()))?;

    print_line(&URL_SAFE_NO_PAD.encode(bytes));
    Ok(())
}

// The secret goes to stdout so it can be piped into a secrets manager.
#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
