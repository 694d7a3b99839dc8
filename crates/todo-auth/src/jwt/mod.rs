//! Key set retrieval, claims, and RS256 token verification.

pub mod claims;
pub mod jwks;
pub mod verifier;

pub use claims::Claims;
pub use jwks::{
    HttpKeySetSource, Jwk, JwkSet, JwksClient, KeySetSource, SigningKey, StaticKeySetSource,
};
pub use verifier::TokenVerifier;
