//! Attachment store implementations.

#[cfg(feature = "s3")]
pub mod s3;

#[cfg(feature = "s3")]
pub use s3::S3AttachmentStore;
