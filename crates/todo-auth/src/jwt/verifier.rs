//! Bearer-token parsing and RS256 verification against the identity provider key set.

use jsonwebtoken::{Algorithm, Validation, decode};
use tracing::debug;

use todo_core::config::AuthConfig;

use crate::error::AuthError;
use crate::principal::Principal;

use super::claims::Claims;
use super::jwks::JwksClient;

/// Required scheme prefix, compared case-insensitively.
const BEARER_PREFIX: &str = "bearer ";

/// Verifies bearer tokens and yields the authenticated [`Principal`].
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    /// Key set client used to find the signing key.
    jwks: JwksClient,
    /// Validation rules applied to every token.
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier over `jwks` with the configured claim checks.
    pub fn new(jwks: JwksClient, config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self { jwks, validation }
    }

    /// Extracts the token from an `Authorization` header value.
    ///
    /// The token is the second space-separated segment after a
    /// case-insensitive `Bearer ` prefix.
    pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
        let header = header.ok_or(AuthError::MalformedHeader("missing header"))?;

        let has_prefix = header
            .get(..BEARER_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BEARER_PREFIX));
        if !has_prefix {
            return Err(AuthError::MalformedHeader("expected bearer scheme"));
        }

        match header.split(' ').nth(1) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AuthError::MalformedHeader("missing token")),
        }
    }

    /// Verifies the bearer token in `header` and returns its subject.
    ///
    /// The key set is consulted before the token is decoded, so an
    /// unreachable identity provider fails every request.
    pub async fn verify(&self, header: Option<&str>) -> Result<Principal, AuthError> {
        let token = Self::parse_bearer(header)?;

        let signing_key = self.jwks.signing_key().await?;
        let decoding_key = signing_key.decoding_key()?;

        let data = decode::<Claims>(token, &decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        debug!(kid = %signing_key.kid, sub = %data.claims.sub, "Token verified");

        Ok(Principal::new(data.claims.sub))
    }
}
