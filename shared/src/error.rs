use thiserror::Error;

use crate::notify::Notice;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("Unsupported media type: {mime}")]
    InvalidFile { mime: String },
    #[error("Unknown species: {0}")]
    InvalidSpecies(String),
    #[error("No species selected")]
    NoSpecies,
    #[error("No image staged for detection")]
    NoImage,
    #[error("A detection request is already in flight")]
    Busy,
    #[error("This detection attempt has already finished")]
    AttemptFinished,
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Detection server unreachable: {0}")]
    Unreachable(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Detection service error: {0}")]
    Service(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl DetectionError {
    /// Input mistakes the user can fix, as opposed to transport or service faults.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DetectionError::InvalidFile { .. }
                | DetectionError::InvalidSpecies(_)
                | DetectionError::NoSpecies
                | DetectionError::NoImage
        )
    }

    pub fn notice(&self) -> Notice {
        match self {
            DetectionError::InvalidFile { .. } => {
                Notice::destructive("Invalid file", "Please upload an image file.")
            }
            DetectionError::InvalidSpecies(key) => {
                Notice::destructive("Invalid animal", format!("\"{}\" is not a supported animal.", key))
            }
            DetectionError::NoSpecies => {
                Notice::destructive("No animal selected", "Select an animal before uploading.")
            }
            DetectionError::NoImage => {
                Notice::destructive("No image", "Upload an image before running detection.")
            }
            DetectionError::Busy => {
                Notice::destructive("Please wait", "A detection is already in progress.")
            }
            DetectionError::AttemptFinished => Notice::destructive(
                "Detection finished",
                "Start a new attempt to upload another image.",
            ),
            DetectionError::Service(message) => Notice::destructive("Detection Error", message.clone()),
            DetectionError::Request(_)
            | DetectionError::Unreachable(_)
            | DetectionError::Status { .. }
            | DetectionError::Decode(_) => Notice::destructive(
                "Error",
                "Could not reach the detection server. Is it running?",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_share_one_message() {
        let errors = [
            DetectionError::Request("bad url".into()),
            DetectionError::Unreachable("connection refused".into()),
            DetectionError::Status { status: 500, body: "boom".into() },
            DetectionError::Decode("expected value".into()),
        ];

        for error in errors {
            let notice = error.notice();
            assert_eq!(notice.title, "Error");
            assert_eq!(notice.description, "Could not reach the detection server. Is it running?");
            assert!(notice.is_destructive());
            assert!(!error.is_validation());
        }
    }

    #[test]
    fn service_error_is_shown_verbatim() {
        let notice = DetectionError::Service("No file part".into()).notice();
        assert_eq!(notice.title, "Detection Error");
        assert_eq!(notice.description, "No file part");
    }

    #[test]
    fn invalid_file_notice() {
        let error = DetectionError::InvalidFile { mime: "application/pdf".into() };
        assert!(error.is_validation());
        assert_eq!(error.notice(), Notice::destructive("Invalid file", "Please upload an image file."));
        assert_eq!(error.to_string(), "Unsupported media type: application/pdf");
    }

    #[test]
    fn info_notices_are_not_destructive() {
        assert!(!Notice::info("Detection Complete", "Disease detected: Healthy").is_destructive());
    }
}
