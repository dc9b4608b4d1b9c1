use serde::{Deserialize, Serialize};

/// Multipart field carrying the logo bytes.
pub const LOGO_FORM_FIELD: &str = "file";
/// Directory under the public root that holds the logo.
pub const LOGO_DIR: &str = "images/logos";
pub const LOGO_FILE_NAME: &str = "logo-angkatan-25.png";
/// URL the uploaded logo is served from.
pub const LOGO_PUBLIC_PATH: &str = "/images/logos/logo-angkatan-25.png";

pub const ALLOWED_LOGO_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

pub const UPLOAD_OK_MESSAGE: &str = "Logo uploaded successfully";
pub const NO_FILE_MESSAGE: &str = "No file provided";
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Only PNG/JPEG images are allowed";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";
pub const FILE_TOO_LARGE_MESSAGE: &str = "File too large";

/// Whether a declared content type may be stored as the logo. Parameters
/// (`; charset=...`) and letter case are ignored; the bytes are never sniffed.
pub fn is_allowed_logo_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    ALLOWED_LOGO_TYPES.contains(&essence.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadAccepted {
    pub message: String,
    pub path: String,
}

impl Default for UploadAccepted {
    fn default() -> Self {
        Self {
            message: UPLOAD_OK_MESSAGE.to_owned(),
            path: LOGO_PUBLIC_PATH.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRejected {
    pub error: String,
}
