//! Payroll CSV upload and preview endpoint

use axum::{
    extract::Multipart,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use payflow_common::Error;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::ingest::ingest;

/// Successful upload response: preview of the parsed file
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    pub total_rows: usize,
    pub columns: Vec<String>,
    pub preview: Vec<Map<String, Value>>,
}

/// POST /api/v1/upload
///
/// Accepts a multipart upload, parses it as CSV, and returns the first
/// five rows for client-side confirmation. All-or-nothing: any failure
/// returns an error with no partial result.
pub async fn upload_csv(mut multipart: Multipart) -> Result<Json<UploadResponse>, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::BadRequest(e.to_string()))?
    {
        // The upload is whichever field carries a filename
        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };

        let content = field
            .bytes()
            .await
            .map_err(|e| UploadError::BadRequest(e.to_string()))?;

        let result = ingest(&filename, &content)?;

        return Ok(Json(UploadResponse {
            success: true,
            filename,
            total_rows: result.total_rows,
            columns: result.columns,
            preview: result.preview,
        }));
    }

    Err(UploadError::MissingFile)
}

/// Upload API errors
#[derive(Debug)]
pub enum UploadError {
    /// Filename did not end in .csv
    InvalidFileType,
    /// No field with a filename in the multipart body
    MissingFile,
    /// Malformed multipart request
    BadRequest(String),
    /// Decode or parse failure while processing the file
    Processing(String),
}

impl From<Error> for UploadError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidFileType => UploadError::InvalidFileType,
            other => UploadError::Processing(other.to_string()),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UploadError::InvalidFileType => (
                StatusCode::BAD_REQUEST,
                "Invalid file type. Please upload a CSV file.".to_string(),
            ),
            UploadError::MissingFile => (
                StatusCode::BAD_REQUEST,
                "No file found in upload request.".to_string(),
            ),
            UploadError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid upload request: {}", msg))
            }
            UploadError::Processing(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing CSV: {}", msg),
            ),
        };

        let body = Json(payflow_common::api::ErrorResponse::new(message));

        (status, body).into_response()
    }
}
