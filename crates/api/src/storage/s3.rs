use aqar_core::images;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};

use super::{ImageStore, StorageError};

/// Stores images in an S3 bucket.
///
/// Credentials come from the standard AWS provider chain
/// (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, profiles, instance roles).
#[derive(Debug, Clone)]
pub struct S3ImageStore {
    inner: aws_sdk_s3::Client,
    bucket: String,
    region: String,
}

impl S3ImageStore {
    pub fn new(inner: aws_sdk_s3::Client, bucket: String, region: String) -> Self {
        Self {
            inner,
            bucket,
            region,
        }
    }

    /// Build a client from the environment for `bucket` in `region`.
    pub async fn from_env(bucket: String, region: String) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;
        Self::new(aws_sdk_s3::Client::new(&config), bucket, region)
    }

    /// Public URL of an object key.
    pub fn public_url(&self, key: &str) -> String {
        object_url(&self.bucket, &self.region, key)
    }

    async fn delete_keys(&self, keys: Vec<String>) -> Result<(), StorageError> {
        let objects = keys
            .into_iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageError::ObjectStore(e.to_string()))?;

        let delete = Delete::builder()
            .set_objects(Some(objects))
            .build()
            .map_err(|e| StorageError::ObjectStore(e.to_string()))?;

        self.inner
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| StorageError::ObjectStore(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}

/// `https://{bucket}.s3.{region}.amazonaws.com/{key}`
pub fn object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn save(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        if !images::is_allowed(original_name) {
            return Err(StorageError::Rejected(format!(
                "'{original_name}' is not an accepted image type"
            )));
        }

        let key = images::unique_name(original_name);
        self.inner
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .set_content_type(content_type.map(str::to_string))
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::ObjectStore(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(key = %key, bucket = %self.bucket, "Stored image in bucket");
        Ok(self.public_url(&key))
    }

    async fn remove(&self, references: &[String]) {
        let keys: Vec<String> = references
            .iter()
            .filter_map(|r| images::key_from_reference(r))
            .map(str::to_string)
            .collect();
        if keys.is_empty() {
            return;
        }

        let count = keys.len();
        match self.delete_keys(keys).await {
            Ok(()) => tracing::debug!(count, bucket = %self.bucket, "Removed images"),
            Err(e) => tracing::warn!(error = %e, bucket = %self.bucket, "Failed to remove images"),
        }
    }

    fn backend(&self) -> &'static str {
        "s3"
    }
}
