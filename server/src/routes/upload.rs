use std::path::Path;

use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cloudsi_shared::upload::{
    FILE_TOO_LARGE_MESSAGE, LOGO_FILE_NAME, LOGO_FORM_FIELD, NO_FILE_MESSAGE,
    UNSUPPORTED_TYPE_MESSAGE, UPLOAD_FAILED_MESSAGE, UploadAccepted, UploadRejected,
    is_allowed_logo_type,
};
use tracing::{debug, error, info, warn};

use crate::state::AppState;

#[derive(Debug)]
pub enum LogoUploadError {
    NoFile,
    UnsupportedType(String),
    TooLarge,
    Body(MultipartError),
    Storage(std::io::Error),
}

impl LogoUploadError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoFile | Self::UnsupportedType(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(e) => e.status(),
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NoFile => NO_FILE_MESSAGE,
            Self::UnsupportedType(_) => UNSUPPORTED_TYPE_MESSAGE,
            Self::TooLarge => FILE_TOO_LARGE_MESSAGE,
            Self::Body(_) | Self::Storage(_) => UPLOAD_FAILED_MESSAGE,
        }
    }
}

impl From<MultipartError> for LogoUploadError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge
        } else {
            Self::Body(e)
        }
    }
}

impl IntoResponse for LogoUploadError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(e) => error!(error = %e, "failed to store cohort logo"),
            Self::Body(e) => warn!(error = %e, "failed to read logo upload body"),
            Self::UnsupportedType(content_type) => {
                debug!(%content_type, "rejected logo with unsupported type");
            }
            Self::NoFile | Self::TooLarge => debug!(reason = self.message(), "rejected logo upload"),
        }
        let body = UploadRejected {
            error: self.message().to_owned(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Replace the cohort logo with the `file` part of a multipart form.
///
/// The declared content type is checked before any bytes touch the disk, so a
/// rejected upload always leaves the previous logo in place.
pub async fn upload_logo(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadAccepted>, LogoUploadError> {
    let result = receive_logo(&state, multipart).await;
    match &result {
        Ok(_) => state.observability.record_logo_upload(),
        Err(LogoUploadError::Storage(_)) => state.observability.record_logo_upload_failure(),
        Err(_) => state.observability.record_logo_upload_rejection(),
    }
    result
}

async fn receive_logo(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadAccepted>, LogoUploadError> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!(%rejection, "logo upload is not a multipart form");
        LogoUploadError::NoFile
    })?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(LOGO_FORM_FIELD) || field.file_name().is_none() {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_owned();
        if !is_allowed_logo_type(&content_type) {
            return Err(LogoUploadError::UnsupportedType(content_type));
        }

        let data = field.bytes().await?;
        write_logo(&state.logo_dir(), &data)
            .await
            .map_err(LogoUploadError::Storage)?;
        info!(bytes = data.len(), %content_type, "cohort logo replaced");
        return Ok(Json(UploadAccepted::default()));
    }

    Err(LogoUploadError::NoFile)
}

/// Write through a sibling temp file so readers never observe a partial logo.
async fn write_logo(dir: &Path, data: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let staging = dir.join(format!("{LOGO_FILE_NAME}.upload"));
    tokio::fs::write(&staging, data).await?;
    tokio::fs::rename(&staging, dir.join(LOGO_FILE_NAME)).await
}

#[cfg(test)]
mod tests {
    use cloudsi_shared::upload::{UploadAccepted, UploadRejected};
    use reqwest::multipart::{Form, Part};

    use crate::config::AppConfig;
    use crate::state::AppState;
    use crate::test_support::{spawn_test_server, state_with_dirs, temp_dir};

    const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n fake image body";

    fn file_form(bytes: &'static [u8], file_name: &str, mime: &str) -> Form {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(mime)
            .expect("valid mime");
        Form::new().part("file", part)
    }

    #[tokio::test]
    async fn png_upload_replaces_logo_and_reports_path() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let logo_path = state.logo_path();
        let (addr, server_handle) = spawn_test_server(state).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("http://{addr}/api/upload-logo"))
            .multipart(file_form(PNG_BYTES, "logo.png", "image/png"))
            .send()
            .await
            .expect("upload request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let accepted: UploadAccepted = response.json().await.expect("upload body");
        assert_eq!(accepted.message, "Logo uploaded successfully");
        assert_eq!(accepted.path, "/images/logos/logo-angkatan-25.png");
        assert_eq!(std::fs::read(&logo_path).expect("stored logo"), PNG_BYTES);

        let served = client
            .get(format!("http://{addr}{}", accepted.path))
            .send()
            .await
            .expect("logo request");
        assert_eq!(served.status(), reqwest::StatusCode::OK);
        assert_eq!(
            served
                .headers()
                .get(reqwest::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-cache")
        );
        assert_eq!(served.bytes().await.expect("logo bytes").as_ref(), PNG_BYTES);

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn jpeg_upload_is_stored_under_the_png_name() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let logo_path = state.logo_path();
        let (addr, server_handle) = spawn_test_server(state).await;

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/api/upload-logo"))
            .multipart(file_form(b"\xff\xd8\xff jpeg", "logo.jpg", "image/jpeg"))
            .send()
            .await
            .expect("upload request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            std::fs::read(&logo_path).expect("stored logo"),
            b"\xff\xd8\xff jpeg"
        );

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn unsupported_type_is_rejected_without_touching_existing_logo() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let logo_path = state.logo_path();
        std::fs::create_dir_all(state.logo_dir()).expect("logo dir");
        std::fs::write(&logo_path, b"previous logo").expect("seed logo");
        let (addr, server_handle) = spawn_test_server(state).await;

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/api/upload-logo"))
            .multipart(file_form(b"hello", "notes.txt", "text/plain"))
            .send()
            .await
            .expect("upload request");
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let rejected: UploadRejected = response.json().await.expect("error body");
        assert_eq!(rejected.error, "Only PNG/JPEG images are allowed");
        assert_eq!(
            std::fs::read(&logo_path).expect("logo still present"),
            b"previous logo"
        );

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn rejected_upload_writes_nothing() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let logo_dir = state.logo_dir();
        let (addr, server_handle) = spawn_test_server(state).await;

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/api/upload-logo"))
            .multipart(file_form(b"GIF89a", "logo.gif", "image/gif"))
            .send()
            .await
            .expect("upload request");
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        assert!(!logo_dir.exists());

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn missing_file_part_is_rejected() {
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        let state = state_with_dirs(cloudsi_shared::site().clone(), &static_dir, &public_dir);
        let (addr, server_handle) = spawn_test_server(state.clone()).await;
        let client = reqwest::Client::new();

        let text_only = client
            .post(format!("http://{addr}/api/upload-logo"))
            .multipart(Form::new().text("file", "not a file"))
            .send()
            .await
            .expect("upload request");
        assert_eq!(text_only.status(), reqwest::StatusCode::BAD_REQUEST);
        let rejected: UploadRejected = text_only.json().await.expect("error body");
        assert_eq!(rejected.error, "No file provided");

        let not_multipart = client
            .post(format!("http://{addr}/api/upload-logo"))
            .json(&serde_json::json!({ "file": "logo.png" }))
            .send()
            .await
            .expect("upload request");
        assert_eq!(not_multipart.status(), reqwest::StatusCode::BAD_REQUEST);

        assert_eq!(state.observability.snapshot().logo_upload_rejections_total, 2);

        server_handle.abort();
        let _ = server_handle.await;
    }

    #[tokio::test]
    async fn oversized_upload_is_refused() {
        static BIG: [u8; 96 * 1024] = [0x42; 96 * 1024];
        let static_dir = temp_dir();
        let public_dir = temp_dir();
        let config = AppConfig {
            static_dir: static_dir.path().to_path_buf(),
            public_dir: public_dir.path().to_path_buf(),
            max_logo_bytes: 1024,
            ..AppConfig::default()
        };
        let state = AppState::new(cloudsi_shared::site().clone(), &config).expect("state");
        let logo_path = state.logo_path();
        let (addr, server_handle) = spawn_test_server(state).await;

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/api/upload-logo"))
            .multipart(file_form(&BIG, "huge.png", "image/png"))
            .send()
            .await
            .expect("upload request");
        assert_eq!(response.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
        assert!(!logo_path.exists());

        server_handle.abort();
        let _ = server_handle.await;
    }
}
