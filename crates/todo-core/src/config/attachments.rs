//! Attachment object store configuration.

use serde::{Deserialize, Serialize};

/// S3 bucket used for todo attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentConfig {
    /// Bucket name. Objects are keyed by todo ID.
    pub bucket: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Lifetime of pre-signed upload URLs, in seconds.
    #[serde(default = "default_url_expiration")]
    pub signed_url_expiration_seconds: u64,
    /// Local S3-compatible endpoint used when the process runs offline.
    #[serde(default = "default_offline_endpoint")]
    pub offline_endpoint: String,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_url_expiration() -> u64 {
    300
}

fn default_offline_endpoint() -> String {
    "http://localhost:4569".to_string()
}
