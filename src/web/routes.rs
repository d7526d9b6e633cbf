//! Request handlers for the two routes of the service.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::morse::{auto_convert, ConvertError, Converter};

use super::persistence::{self, StoreError};

/// Name of the required multipart file field.
const FILE_FIELD: &str = "myFile";

/// Relative locations probed for the index page.
const INDEX_CANDIDATES: [&str; 2] = ["index.html", "../index.html"];

/// Application state shared across handlers.
///
/// Converter and table are immutable after construction, so the state needs
/// no locking for concurrent requests.
pub struct AppState {
    pub converter: Converter,
    /// Directory converted results are written to.
    pub output_dir: PathBuf,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            converter: Converter::cyrillic(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET /` — serve the static upload page.
pub(super) async fn serve_index() -> Response {
    for path in INDEX_CANDIDATES {
        if let Ok(page) = tokio::fs::read_to_string(path).await {
            tracing::debug!(path, "index page loaded");
            return Html(page).into_response();
        }
    }
    (StatusCode::NOT_FOUND, "index.html не найден").into_response()
}

/// `POST /upload` — convert an uploaded text file.
///
/// Reads the first `myFile` field, auto-detects the conversion direction,
/// writes the converted text to a timestamp-named file and renders both the
/// original and the converted text as plain text.
pub(super) async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let mut multipart = multipart.map_err(|err| AppError::Multipart(err.to_string()))?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Multipart(err.to_string()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|err| AppError::Read(err.to_string()))?;
            upload = Some((filename, data));
            break;
        }
    }
    let (filename, data) = upload.ok_or(AppError::MissingFile)?;

    // The original service cast uploaded bytes to text unchecked; lossy
    // decoding is the closest total equivalent.
    let original = String::from_utf8_lossy(&data).into_owned();
    let converted = auto_convert(&state.converter, &original)?;

    let path = persistence::write_result(&state.output_dir, &filename, &converted)?;
    tracing::info!(path = %path.display(), bytes = converted.len(), "conversion stored");

    let body = format!("Исходный текст:\n{original}\n\nРезультат:\n{converted}");
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

/// Per-stage failures of the upload flow.
///
/// Every variant renders as a 500 with that stage's Russian message; none
/// of them terminates the server.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("multipart form could not be parsed: {0}")]
    Multipart(String),
    #[error("file field \"myFile\" is missing")]
    MissingFile,
    #[error("uploaded file could not be read: {0}")]
    Read(String),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// User-facing message, matching the original service wording.
    fn message(&self) -> &'static str {
        match self {
            Self::Multipart(_) => "Ошибка при парсинге формы",
            Self::MissingFile => "Ошибка при получении файла",
            Self::Read(_) => "Ошибка при чтении файла",
            Self::Convert(_) => "Ошибка при конвертации",
            Self::Store(StoreError::Create(_)) => "Ошибка при создании файла",
            Self::Store(StoreError::Write(_)) => "Ошибка при записи файла",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "upload request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.message()).into_response()
    }
}
