use std::path::PathBuf;

use aqar_core::images;
use async_trait::async_trait;

use super::{ImageStore, StorageError};

/// Stores images as files in one flat directory.
///
/// The reference returned by `save` is the stored filename; the file is
/// served at `/uploads/{filename}`.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve a stored reference to a path inside the upload directory.
    ///
    /// Anything that is not a plain sanitized filename resolves to `None`,
    /// so a crafted reference can never point outside the directory.
    fn path_for(&self, reference: &str) -> Option<PathBuf> {
        let key = images::key_from_reference(reference)?;
        if images::secure_filename(key) != key {
            return None;
        }
        Some(self.dir.join(key))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(
        &self,
        original_name: &str,
        _content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        if !images::is_allowed(original_name) {
            return Err(StorageError::Rejected(format!(
                "'{original_name}' is not an accepted image type"
            )));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let stored = images::unique_name(original_name);
        tokio::fs::write(self.dir.join(&stored), &bytes).await?;

        tracing::debug!(file = %stored, size = bytes.len(), "Stored image locally");
        Ok(stored)
    }

    async fn remove(&self, references: &[String]) {
        for reference in references {
            let Some(path) = self.path_for(reference) else {
                tracing::warn!(reference = %reference, "Skipping unrecognised image reference");
                continue;
            };
            match tokio::fs::remove_file(&path).await {
                Ok(()) => tracing::debug!(path = %path.display(), "Removed image"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to remove image")
                }
            }
        }
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let stored = store
            .save("front view.JPG", Some("image/jpeg"), b"jpeg-bytes".to_vec())
            .await
            .unwrap();
        assert!(stored.ends_with("_front_view.JPG"));
        let path = dir.path().join(&stored);
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"jpeg-bytes");

        store.remove(&[stored.clone()]).await;
        assert!(!path.exists());

        // Removing again is a no-op.
        store.remove(&[stored]).await;
    }

    #[tokio::test]
    async fn rejects_disallowed_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let err = store.save("notes.pdf", None, vec![1, 2, 3]).await.unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
    }

    #[tokio::test]
    async fn remove_ignores_traversal_references() {
        let parent = tempfile::tempdir().unwrap();
        let victim = parent.path().join("keep.txt");
        tokio::fs::write(&victim, b"x").await.unwrap();

        let store = LocalImageStore::new(parent.path().join("uploads"));
        store.remove(&["..".to_string(), "../keep.txt".to_string()]).await;

        assert!(victim.exists());
    }

    #[tokio::test]
    async fn remove_accepts_url_references() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());
        tokio::fs::write(dir.path().join("abc_a.png"), b"x").await.unwrap();

        store.remove(&["/uploads/abc_a.png".to_string()]).await;
        assert!(!dir.path().join("abc_a.png").exists());
    }
}
