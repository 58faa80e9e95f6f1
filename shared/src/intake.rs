use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::DetectionError;

/// Only the declared media type is checked, never the bytes.
pub fn validate_media_type(mime: &str) -> Result<(), DetectionError> {
    if mime.starts_with("image/") {
        Ok(())
    } else {
        Err(DetectionError::InvalidFile {
            mime: mime.to_string(),
        })
    }
}

/// A staged image together with a `data:` URL that can be put straight into
/// an `<img src>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub name: String,
    pub mime: String,
    pub size: usize,
    pub data_url: String,
}

impl UploadedImage {
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: &[u8]) -> Result<Self, DetectionError> {
        let mime = mime.into();
        validate_media_type(&mime)?;
        let data_url = format!("data:{};base64,{}", mime, STANDARD.encode(bytes));

        Ok(Self {
            name: name.into(),
            mime,
            size: bytes.len(),
            data_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_image_subtype() {
        for mime in ["image/jpeg", "image/png", "image/webp", "image/gif", "image/svg+xml"] {
            assert!(validate_media_type(mime).is_ok(), "{mime}");
        }
    }

    #[test]
    fn rejects_non_images() {
        for mime in ["application/pdf", "text/plain", "", "video/mp4", "IMAGE/png"] {
            let err = validate_media_type(mime).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.notice().title, "Invalid file");
        }
    }

    #[test]
    fn encodes_data_url() {
        let image = UploadedImage::from_bytes("dot.png", "image/png", b"hello").unwrap();
        assert_eq!(image.data_url, "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.size, 5);
        assert_eq!(image.name, "dot.png");
    }

    #[test]
    fn non_image_payload_is_not_encoded() {
        let err = UploadedImage::from_bytes("notes.txt", "text/plain", b"hi").unwrap_err();
        assert_eq!(err, DetectionError::InvalidFile { mime: "text/plain".into() });
    }
}
