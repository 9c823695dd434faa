//! Image storage backends.
//!
//! Handlers talk to an [`ImageStore`] trait object held in `AppState`:
//!
//! - [`local::LocalImageStore`] -- files in a directory served at `/uploads`.
//! - [`s3::S3ImageStore`] -- objects in a bucket, referenced by public URL.
//!
//! A stored image is identified by the string `save` returns (a bare
//! filename or a URL). That string is what listing rows keep in `images`.

pub mod local;
pub mod s3;

use async_trait::async_trait;

pub use local::LocalImageStore;
pub use s3::S3ImageStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object storage error: {0}")]
    ObjectStore(String),

    #[error("Rejected upload: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist one image and return its stored reference.
    async fn save(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;

    /// Remove previously stored images. Best-effort: failures are logged.
    async fn remove(&self, references: &[String]);

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
