use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{
    FileLoader, MediaExtractor, SpeechSynthesizer, TranscriptionEngine, Translator,
};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct ExtractionResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<E, M, S, T, F>(
    State(state): State<AppState<E, M, S, T, F>>,
    mut multipart: Multipart,
) -> Response
where
    E: TranscriptionEngine + 'static,
    M: MediaExtractor + 'static,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
    F: FileLoader + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Extraction request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Extracting text from upload");

    match state.extraction_service.extract(&data, &filename).await {
        Ok(extracted) => (
            StatusCode::OK,
            Json(ExtractionResponse {
                text: extracted.text,
                warning: extracted.warning,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Text extraction failed");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
