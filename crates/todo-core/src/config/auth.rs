//! Token verification configuration.

use serde::{Deserialize, Serialize};

/// Identity provider settings for bearer-token verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// URL of the identity provider's JSON Web Key Set.
    pub jwks_url: String,
    /// How long a fetched key set may be reused. `0` fetches on every verification.
    #[serde(default)]
    pub jwks_cache_ttl_seconds: u64,
    /// Expected `iss` claim, if any.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Expected `aud` claim, if any.
    #[serde(default)]
    pub audience: Option<String>,
    /// Clock-skew leeway applied to `exp`/`nbf`, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_leeway() -> u64 {
    5
}
