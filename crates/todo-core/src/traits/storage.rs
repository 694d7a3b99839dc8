//! Object store trait for todo attachments.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for the object store holding todo attachments.
///
/// Implemented by the S3 provider in `todo-storage`. Callers never hold
/// store credentials; they upload through the pre-signed URL.
#[async_trait]
pub trait AttachmentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Produce a time-limited URL that permits a single PUT to `key`.
    async fn presign_upload(&self, key: &str, expires_in: Duration) -> AppResult<String>;

    /// The canonical URL an object stored under `key` is served from.
    fn object_url(&self, key: &str) -> String;
}
