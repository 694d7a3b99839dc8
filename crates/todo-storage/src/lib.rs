//! # todo-storage
//!
//! Object store providers for todo attachments. The S3 provider issues
//! pre-signed PUT URLs and derives canonical object URLs.

pub mod providers;

#[cfg(feature = "s3")]
pub use providers::S3AttachmentStore;
