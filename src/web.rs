//! Upload form for generating sheets over HTTP

use crate::constants::DEFAULT_WEB_FILENAME;
use crate::{SheetError, SheetReport, SheetStyle, TemplateImage, VocabSource, generate_sheet};
use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::{HeaderName, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Response header carrying the number of dropped input lines
pub const SKIPPED_LINES_HEADER: &str = "x-skipped-lines";

/// Settings shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    /// Template image, loaded anew for every request
    pub template_path: PathBuf,
    pub style: SheetStyle,
}

impl AppState {
    pub fn new<P: Into<PathBuf>>(template_path: P) -> Self {
        Self {
            template_path: template_path.into(),
            style: SheetStyle::default(),
        }
    }
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Application-specific error types for the web form
#[derive(Debug)]
pub enum AppError {
    /// The form submission is incomplete or malformed
    BadRequest(String),
    /// Parsing, rendering or template loading failed
    Sheet(SheetError),
    /// The render task did not complete
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(e) => (StatusCode::BAD_REQUEST, e),
            AppError::Sheet(e @ SheetError::Decode(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::Sheet(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<SheetError> for AppError {
    fn from(err: SheetError) -> Self {
        AppError::Sheet(err)
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The upload form
pub async fn index() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Vocabulary PDF Generator</title>
</head>
<body>
<h1>Vocabulary PDF Generator</h1>
<form action="/generate" method="post" enctype="multipart/form-data">
<p>
<label for="vocab">Upload your vocabulary text file (semicolon-separated):</label><br>
<input type="file" id="vocab" name="vocab" accept=".txt,text/plain" required>
</p>
<p>
<label for="filename">Enter output PDF file name:</label><br>
<input type="text" id="filename" name="filename" value="{DEFAULT_WEB_FILENAME}" required>
</p>
<button type="submit">Generate PDF</button>
</form>
</body>
</html>
"#
    ))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "vocab-sheet",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Render an uploaded vocabulary file and return it as a download
pub async fn generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload = None;
    let mut requested_name = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("vocab") => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file data: {e}"))
                })?;
                upload = Some(bytes.to_vec());
            }
            Some("filename") => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file name: {e}"))
                })?;
                requested_name = Some(text);
            }
            other => debug!("Ignoring form field {:?}", other),
        }
    }

    let upload = upload
        .ok_or_else(|| AppError::BadRequest("No vocabulary file provided in upload".to_string()))?;
    let file_name = download_name(requested_name.as_deref().unwrap_or(DEFAULT_WEB_FILENAME))?;

    let AppState {
        template_path,
        style,
    } = state;
    let (pdf, report) = tokio::task::spawn_blocking(move || -> crate::Result<(Vec<u8>, SheetReport)> {
        let template = TemplateImage::open(&template_path)?;
        let mut pdf = Vec::new();
        let report = generate_sheet(&VocabSource::Bytes(upload), &template, &style, &mut pdf)?;
        Ok((pdf, report))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Render task failed: {e}")))??;

    info!(
        "Serving {} ({} pages, {} bytes)",
        file_name,
        report.pages,
        pdf.len()
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
            (
                HeaderName::from_static(SKIPPED_LINES_HEADER),
                report.skipped.len().to_string(),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// Turn the requested name into a safe `.pdf` download name
pub fn download_name(requested: &str) -> Result<String, AppError> {
    let cleaned: String = requested
        .trim()
        .chars()
        .filter(|c| !matches!(*c, '"' | '/' | '\\'))
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(AppError::BadRequest(
            "Output file name must not be empty".to_string(),
        ));
    }

    if cleaned.to_ascii_lowercase().ends_with(".pdf") {
        Ok(cleaned.to_string())
    } else {
        Ok(format!("{cleaned}.pdf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_name_appends_extension() {
        assert_eq!(download_name("Episode_1").unwrap(), "Episode_1.pdf");
        assert_eq!(download_name("lesson.PDF").unwrap(), "lesson.PDF");
    }

    #[test]
    fn test_download_name_strips_unsafe_characters() {
        assert_eq!(download_name(" ../a\"b ").unwrap(), "..ab.pdf");
        assert_eq!(download_name("Übung 2").unwrap(), "_bung 2.pdf");
    }

    #[test]
    fn test_download_name_rejects_empty() {
        assert!(matches!(
            download_name("  \"/ "),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_decode_error_maps_to_unprocessable() {
        let bytes = vec![0xff_u8, 0xfe];
        let err = std::str::from_utf8(&bytes).unwrap_err();
        let response = AppError::from(SheetError::Decode(err)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_io_error_maps_to_internal() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "template missing");
        let response = AppError::from(SheetError::Io(err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
