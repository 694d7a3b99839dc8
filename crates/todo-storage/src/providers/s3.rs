//! S3 attachment store: pre-signed uploads and canonical object URLs.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;

use todo_core::config::AttachmentConfig;
use todo_core::error::{AppError, ErrorKind};
use todo_core::result::AppResult;
use todo_core::traits::storage::AttachmentStore;

/// Credentials accepted by local S3 emulators.
const OFFLINE_ACCESS_KEY: &str = "S3RVER";
const OFFLINE_SECRET_KEY: &str = "S3RVER";

/// S3-backed attachment store.
#[derive(Debug, Clone)]
pub struct S3AttachmentStore {
    client: Client,
    bucket: String,
}

impl S3AttachmentStore {
    /// Create a new S3 attachment store.
    ///
    /// Loads the default AWS credential chain. When `offline` is set, the
    /// client targets `config.offline_endpoint` with path-style addressing
    /// and static emulator credentials.
    pub async fn new(config: &AttachmentConfig, offline: bool) -> AppResult<Self> {
        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            offline,
            "Initializing S3 attachment store"
        );

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if offline {
            builder = builder
                .endpoint_url(&config.offline_endpoint)
                .force_path_style(true)
                .credentials_provider(Credentials::new(
                    OFFLINE_ACCESS_KEY,
                    OFFLINE_SECRET_KEY,
                    None,
                    None,
                    "offline",
                ));
        }

        Ok(Self::from_client(
            Client::from_conf(builder.build()),
            &config.bucket,
        ))
    }

    /// Wrap an already-configured client.
    pub fn from_client(client: Client, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl AttachmentStore for S3AttachmentStore {
    async fn presign_upload(&self, key: &str, expires_in: Duration) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(expires_in).map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Invalid presigning expiration", e)
        })?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to presign attachment upload", e)
            })?;

        Ok(request.uri().to_string())
    }

    fn object_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket, key)
    }
}
