//! Naming and acceptance rules for uploaded listing images.
//!
//! Storage itself lives in the API crate; this module only decides which
//! uploads are accepted and what they are called once stored.

use uuid::Uuid;

/// Accepted image extensions (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Maximum number of images kept per offer.
pub const MAX_IMAGES_PER_OFFER: usize = 5;

/// Maximum size of a single uploaded image (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Name used when sanitizing leaves nothing usable.
const FALLBACK_NAME: &str = "image";

/// Extension of `filename`, lowercased, if it has one.
pub fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() || ext.contains(['/', '\\']) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether `filename` carries one of [`ALLOWED_EXTENSIONS`].
pub fn is_allowed(filename: &str) -> bool {
    extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Directory parts are dropped, whitespace becomes `_`, and anything other
/// than ASCII alphanumerics, `.`, `-` and `_` is removed. Leading dots and
/// underscores are stripped so the result can never be hidden or relative.
pub fn secure_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");

    let mut out = String::with_capacity(base.len());
    let mut last_was_space = false;
    for c in base.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push('_');
            }
            last_was_space = true;
            continue;
        }
        last_was_space = false;
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            out.push(c);
        }
    }

    let trimmed = out.trim_start_matches(['.', '_']).trim_end_matches('_');
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collision-free stored name: `{uuid-hex}_{secure_filename}`.
///
/// When sanitizing strips the extension (e.g. an all-Arabic name such as
/// `صورة.jpg` keeps only `.jpg` → `jpg`), the original extension is
/// re-attached so the stored object keeps its type.
pub fn unique_name(original: &str) -> String {
    let mut safe = secure_filename(original);
    if let Some(ext) = extension(original) {
        if extension(&safe).as_deref() != Some(ext.as_str()) {
            safe = format!("{FALLBACK_NAME}.{ext}");
        }
    }
    format!("{}_{}", Uuid::new_v4().simple(), safe)
}

/// Object key (or local filename) behind a stored image reference.
///
/// References are either bare filenames (local storage) or public URLs
/// (object storage); in both cases the key is the last path segment.
pub fn key_from_reference(reference: &str) -> Option<&str> {
    let without_query = reference.split(['?', '#']).next().unwrap_or("");
    without_query
        .rsplit('/')
        .next()
        .filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_extensions_are_case_insensitive() {
        assert!(is_allowed("front.JPG"));
        assert!(is_allowed("plan.png"));
        assert!(is_allowed("a.b.jpeg"));
        assert!(!is_allowed("contract.pdf"));
        assert!(!is_allowed("noext"));
        assert!(!is_allowed(""));
    }

    #[test]
    fn secure_filename_strips_paths_and_specials() {
        assert_eq!(secure_filename("../../etc/passwd"), "passwd");
        assert_eq!(secure_filename("C:\\photos\\my villa.jpg"), "my_villa.jpg");
        assert_eq!(secure_filename(".hidden.png"), "hidden.png");
        assert_eq!(secure_filename("a  b!!.gif"), "a_b.gif");
    }

    #[test]
    fn secure_filename_falls_back() {
        assert_eq!(secure_filename("صورة"), "image");
        assert_eq!(secure_filename(""), "image");
        assert_eq!(secure_filename("..."), "image");
    }

    #[test]
    fn unique_name_keeps_extension() {
        let name = unique_name("صورة.jpg");
        assert!(name.ends_with("_image.jpg"), "got {name}");
        let name = unique_name("villa.png");
        assert!(name.ends_with("_villa.png"));
        // 32 hex chars + '_' prefix.
        assert_eq!(name.find('_'), Some(32));
    }

    #[test]
    fn unique_names_differ() {
        assert_ne!(unique_name("a.png"), unique_name("a.png"));
    }

    #[test]
    fn key_from_url_and_filename() {
        assert_eq!(
            key_from_reference("https://bucket.s3.eu-west-1.amazonaws.com/abc_villa.png"),
            Some("abc_villa.png")
        );
        assert_eq!(key_from_reference("abc_villa.png"), Some("abc_villa.png"));
        assert_eq!(key_from_reference("https://x/y/z.png?sig=1"), Some("z.png"));
        assert_eq!(key_from_reference("https://x/"), None);
    }
}
