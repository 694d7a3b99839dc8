//! Identity provider key set: retrieval, optional caching, and signing-key selection.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::DecodingKey;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use tracing::debug;

use todo_core::config::AuthConfig;

use crate::error::AuthError;

/// Line width of base64 payloads inside PEM blocks.
const PEM_LINE_WIDTH: usize = 64;

/// One entry of a published key set. Unknown members are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    /// Intended use (`"sig"` for signature verification).
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    /// Key type (`"RSA"`).
    #[serde(default)]
    pub kty: String,
    /// Key ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// X.509 certificate chain, base64 DER.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5c: Option<Vec<String>>,
    /// RSA modulus, base64url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    /// RSA exponent, base64url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
}

impl Jwk {
    fn certificate(&self) -> Option<&str> {
        self.x5c
            .as_ref()
            .and_then(|chain| chain.first())
            .map(String::as_str)
            .filter(|cert| !cert.is_empty())
    }

    fn components(&self) -> Option<(&str, &str)> {
        match (self.n.as_deref(), self.e.as_deref()) {
            (Some(n), Some(e)) if !n.is_empty() && !e.is_empty() => Some((n, e)),
            _ => None,
        }
    }

    /// Whether this key can verify RS256 signatures.
    pub fn is_signing_key(&self) -> bool {
        self.key_use.as_deref() == Some("sig")
            && self.kty == "RSA"
            && self.kid.as_deref().is_some_and(|kid| !kid.is_empty())
            && (self.certificate().is_some() || self.components().is_some())
    }
}

/// A published key set: `{ "keys": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwkSet {
    /// The keys, in publication order.
    #[serde(default)]
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Select the first key usable for signature verification.
    pub fn signing_key(&self) -> Result<SigningKey, AuthError> {
        if self.keys.is_empty() {
            return Err(AuthError::NoSigningKey);
        }

        self.keys
            .iter()
            .find(|key| key.is_signing_key())
            .map(SigningKey::from_jwk)
            .ok_or(AuthError::NoSigningKey)
    }
}

/// Verification material for the selected key.
#[derive(Debug, Clone, PartialEq)]
pub struct SigningKey {
    /// Key ID.
    pub kid: String,
    /// `x5c[0]` wrapped as a PEM certificate, when published.
    pub certificate_pem: Option<String>,
    /// RSA modulus and exponent, when published.
    pub components: Option<(String, String)>,
}

impl SigningKey {
    fn from_jwk(jwk: &Jwk) -> Self {
        Self {
            kid: jwk.kid.clone().unwrap_or_default(),
            certificate_pem: jwk.certificate().map(cert_to_pem),
            components: jwk
                .components()
                .map(|(n, e)| (n.to_string(), e.to_string())),
        }
    }

    /// Build the RS256 decoding key.
    ///
    /// Modulus/exponent are preferred; a key published only as a
    /// certificate is read from its PEM form.
    pub fn decoding_key(&self) -> Result<DecodingKey, AuthError> {
        if let Some((n, e)) = &self.components {
            return DecodingKey::from_rsa_components(n, e)
                .map_err(|e| AuthError::InvalidToken(format!("Unusable RSA components: {e}")));
        }

        match &self.certificate_pem {
            Some(pem) => DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| AuthError::InvalidToken(format!("Unusable certificate: {e}"))),
            None => Err(AuthError::NoSigningKey),
        }
    }
}

/// Wrap a base64 DER certificate in PEM delimiters, 64 characters per line.
pub fn cert_to_pem(cert: &str) -> String {
    let chars: Vec<char> = cert.chars().collect();
    let body = chars
        .chunks(PEM_LINE_WIDTH)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    format!("-----BEGIN CERTIFICATE-----\n{body}\n-----END CERTIFICATE-----\n")
}

/// Where key sets come from.
#[async_trait]
pub trait KeySetSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the current key set.
    async fn fetch(&self) -> Result<JwkSet, AuthError>;
}

/// Fetches the key set over HTTPS from the identity provider.
#[derive(Debug, Clone)]
pub struct HttpKeySetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpKeySetSource {
    /// Create a source for `url` sharing the given HTTP client.
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl KeySetSource for HttpKeySetSource {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        debug!(url = %self.url, "Fetching key set");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(format!("Invalid key set document: {e}")))
    }
}

/// A fixed key set, for pre-provisioned keys and tests.
#[derive(Debug, Clone)]
pub struct StaticKeySetSource {
    keys: JwkSet,
}

impl StaticKeySetSource {
    /// Serve `keys` on every fetch.
    pub fn new(keys: JwkSet) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl KeySetSource for StaticKeySetSource {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        Ok(self.keys.clone())
    }
}

/// Key set client with an optional time-bounded cache.
///
/// Without a TTL every call goes to the source. With a TTL a fetched set is
/// reused until it expires, after which the next call fetches again.
#[derive(Debug, Clone)]
pub struct JwksClient {
    source: Arc<dyn KeySetSource>,
    cache: Option<Cache<(), Arc<JwkSet>>>,
}

impl JwksClient {
    /// Create a client over `source`; `ttl` of zero disables caching.
    pub fn new(source: Arc<dyn KeySetSource>, ttl: Duration) -> Self {
        let cache = (!ttl.is_zero())
            .then(|| Cache::builder().max_capacity(1).time_to_live(ttl).build());
        Self { source, cache }
    }

    /// Create an HTTP-backed client from auth configuration.
    pub fn from_config(config: &AuthConfig, http: reqwest::Client) -> Self {
        Self::new(
            Arc::new(HttpKeySetSource::new(http, config.jwks_url.clone())),
            Duration::from_secs(config.jwks_cache_ttl_seconds),
        )
    }

    /// Current key set, from cache when allowed.
    pub async fn key_set(&self) -> Result<Arc<JwkSet>, AuthError> {
        let Some(cache) = &self.cache else {
            return self.source.fetch().await.map(Arc::new);
        };

        if let Some(keys) = cache.get(&()).await {
            return Ok(keys);
        }

        let keys = Arc::new(self.source.fetch().await?);
        cache.insert((), Arc::clone(&keys)).await;
        Ok(keys)
    }

    /// Fetch the key set and select its signing key.
    pub async fn signing_key(&self) -> Result<SigningKey, AuthError> {
        self.key_set().await?.signing_key()
    }
}
