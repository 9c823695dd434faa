//! Multipart listing forms.
//!
//! Offer and property endpoints accept `multipart/form-data`: text inputs by
//! name plus up to five image files in `image1`..`image5` (or repeated
//! `images` fields). Uploads that cannot be used are skipped with a warning
//! rather than failing the whole form.

use std::collections::HashMap;

use aqar_core::error::CoreError;
use aqar_core::form;
use aqar_core::images::{self, MAX_IMAGES_PER_OFFER, MAX_UPLOAD_BYTES};
use aqar_core::types::DbId;
use axum::extract::Multipart;

use crate::error::AppResult;
use crate::storage::ImageStore;

/// One image file received in a form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Parsed multipart listing form.
#[derive(Debug, Default)]
pub struct ListingForm {
    fields: HashMap<String, String>,
    uploads: Vec<Upload>,
}

/// Whether a multipart field name carries an image file.
pub fn is_image_field(name: &str) -> bool {
    if name == "images" {
        return true;
    }
    name.strip_prefix("image")
        .and_then(|n| n.parse::<usize>().ok())
        .is_some_and(|n| (1..=MAX_IMAGES_PER_OFFER).contains(&n))
}

impl ListingForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            if is_image_field(&name) {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                form.push_upload(Upload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            } else if !name.is_empty() {
                let text = field.text().await?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// Build a form from already-split parts.
    pub fn from_parts<I, K, V>(fields: I, uploads: Vec<Upload>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            uploads: Vec::new(),
        };
        for upload in uploads {
            form.push_upload(upload);
        }
        form
    }

    fn push_upload(&mut self, upload: Upload) {
        if upload.file_name.trim().is_empty() || upload.bytes.is_empty() {
            // Browsers submit untouched file inputs as empty parts.
            return;
        }
        if !images::is_allowed(&upload.file_name) {
            tracing::warn!(file = %upload.file_name, "Skipping upload with disallowed extension");
            return;
        }
        if upload.bytes.len() > MAX_UPLOAD_BYTES {
            tracing::warn!(
                file = %upload.file_name,
                size = upload.bytes.len(),
                "Skipping oversized upload"
            );
            return;
        }
        if self.uploads.len() >= MAX_IMAGES_PER_OFFER {
            tracing::warn!(file = %upload.file_name, "Skipping upload beyond image limit");
            return;
        }
        self.uploads.push(upload);
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed, length-limited text; missing fields become `""`.
    pub fn clipped(&self, name: &str, max_chars: usize) -> String {
        form::clip_opt(self.text(name), max_chars)
    }

    pub fn decimal(&self, name: &str) -> Option<f64> {
        form::parse_decimal(self.text(name))
    }

    /// Optional id reference. Blank means none; anything else must parse.
    pub fn id(&self, name: &str) -> Result<Option<DbId>, CoreError> {
        match self.text(name).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<DbId>()
                .map(Some)
                .map_err(|_| CoreError::Validation(format!("Field '{name}' must be an id"))),
        }
    }

    pub fn uploads(&self) -> &[Upload] {
        &self.uploads
    }

    pub fn take_uploads(&mut self) -> Vec<Upload> {
        std::mem::take(&mut self.uploads)
    }
}

/// Save every upload, returning the references of those that succeeded.
///
/// A failed upload is logged and left out.
pub async fn store_uploads(store: &dyn ImageStore, uploads: Vec<Upload>) -> Vec<String> {
    let mut stored = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let name = upload.file_name.clone();
        match store
            .save(&upload.file_name, upload.content_type.as_deref(), upload.bytes)
            .await
        {
            Ok(reference) => stored.push(reference),
            Err(e) => tracing::warn!(
                backend = store.backend(),
                file = %name,
                error = %e,
                "Image upload failed"
            ),
        }
    }
    stored
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;

    use super::*;

    fn upload(name: &str, size: usize) -> Upload {
        Upload {
            file_name: name.to_string(),
            content_type: None,
            bytes: vec![7; size],
        }
    }

    #[test]
    fn image_field_names() {
        assert!(is_image_field("image1"));
        assert!(is_image_field("image5"));
        assert!(is_image_field("images"));
        assert!(!is_image_field("image0"));
        assert!(!is_image_field("image6"));
        assert!(!is_image_field("imagex"));
        assert!(!is_image_field("unit_type"));
    }

    #[test]
    fn unusable_uploads_are_skipped() {
        let form = ListingForm::from_parts(
            Vec::<(String, String)>::new(),
            vec![
                upload("a.png", 3),
                upload("", 3),
                upload("b.pdf", 3),
                upload("c.jpg", 0),
                upload("d.gif", MAX_UPLOAD_BYTES + 1),
            ],
        );
        let names: Vec<&str> = form.uploads().iter().map(|u| u.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png"]);
    }

    #[test]
    fn at_most_five_images() {
        let uploads = (0..7).map(|i| upload(&format!("{i}.jpg"), 1)).collect();
        let form = ListingForm::from_parts(Vec::<(String, String)>::new(), uploads);
        assert_eq!(form.uploads().len(), MAX_IMAGES_PER_OFFER);
    }

    #[test]
    fn text_helpers() {
        let form = ListingForm::from_parts(
            [("price", "1,500"), ("unit_type", "  شقة  "), ("property_id", "x")],
            Vec::new(),
        );
        assert_eq!(form.decimal("price"), Some(1500.0));
        assert_eq!(form.decimal("area"), None);
        assert_eq!(form.clipped("unit_type", 200), "شقة");
        assert_eq!(form.clipped("missing", 10), "");
        assert!(form.id("property_id").is_err());
        assert_eq!(form.id("other").unwrap(), None);
    }

    #[tokio::test]
    async fn parses_multipart_body() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"unit_type\"\r\n\r\n\
             فيلا\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"image1\"; filename=\"front.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             PNGDATA\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"image2\"; filename=\"\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             \r\n\
             --{boundary}--\r\n"
        );
        let req = Request::builder()
            .method("POST")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let multipart = Multipart::from_request(req, &()).await.unwrap();
        let form = ListingForm::from_multipart(multipart).await.unwrap();

        assert_eq!(form.text("unit_type"), Some("فيلا"));
        assert_eq!(form.uploads().len(), 1);
        assert_eq!(form.uploads()[0].file_name, "front.png");
        assert_eq!(form.uploads()[0].content_type.as_deref(), Some("image/png"));
        assert_eq!(form.uploads()[0].bytes, b"PNGDATA");
    }
}
