//! Token verification failures.

use thiserror::Error;

/// Why a bearer token was not accepted.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The header is missing, lacks the `Bearer ` prefix, or carries no token.
    #[error("Malformed authorization header: {0}")]
    MalformedHeader(&'static str),
    /// The key set is empty or holds no RSA signature-verification key.
    #[error("The key set contains no signature verification keys")]
    NoSigningKey,
    /// Signature, expiry, claims or structure did not validate.
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    /// The key set could not be fetched or decoded.
    #[error("Key set unavailable: {0}")]
    KeySetUnavailable(String),
}
