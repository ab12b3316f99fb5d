use std::str::FromStr;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    FileLoader, MediaExtractor, SpeechSynthesizer, TranscriptionEngine, TranscriptionError,
    Translator,
};
use crate::application::services::{TranscriptionReport, TranscriptionServiceError};
use crate::domain::{ContentType, ModelSize, TranscriptSegment};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub text: String,
    pub segments: Vec<TranscriptSegment>,
    pub model: String,
    pub elapsed_secs: f64,
}

impl From<TranscriptionReport> for TranscriptionResponse {
    fn from(report: TranscriptionReport) -> Self {
        Self {
            text: report.transcript.full_text,
            segments: report.transcript.segments,
            model: report.model.to_string(),
            elapsed_secs: report.elapsed.as_secs_f64(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SampleTranscriptionBody {
    pub model_size: Option<String>,
}

fn service_error_response(error: TranscriptionServiceError) -> Response {
    let status = match &error {
        TranscriptionServiceError::SampleMissing(_) => StatusCode::NOT_FOUND,
        TranscriptionServiceError::TempFile(_) => StatusCode::INTERNAL_SERVER_ERROR,
        TranscriptionServiceError::Extraction(_) => StatusCode::BAD_GATEWAY,
        TranscriptionServiceError::Transcription(TranscriptionError::ModelLoadFailed(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        TranscriptionServiceError::Transcription(_) => StatusCode::BAD_GATEWAY,
    };
    tracing::error!(error = %error, "Transcription request failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E, M, S, T, F>(
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
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut model_token: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
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

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let data = match field.bytes().await {
                    Ok(d) => d.to_vec(),
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
                upload = Some((filename, data));
            }
            "model_size" => {
                model_token = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Transcription request with no file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    };

    // Reject unknown model tokens before touching the engine.
    let model = match model_token {
        Some(raw) => match ModelSize::from_str(&raw) {
            Ok(m) => m,
            Err(e) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse { error: e }),
                )
                    .into_response();
            }
        },
        None => state.settings.transcription.default_model,
    };

    tracing::debug!(filename = %filename, bytes = data.len(), model = %model, "Processing transcription upload");

    let result = match ContentType::from_filename(&filename) {
        Some(ContentType::Audio) => state.transcription_service.transcribe_audio(data, model).await,
        Some(ContentType::Video) => {
            let extension = filename.rsplit_once('.').map(|(_, e)| e).unwrap_or("mp4");
            state
                .transcription_service
                .transcribe_video(data, extension, model)
                .await
        }
        _ => {
            tracing::warn!(filename = %filename, "Unsupported upload type for transcription");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!(
                        "Unsupported file type: {}. Expected audio (.mp3/.wav/.m4a/.ogg) or video (.mp4/.avi/.mov/.mkv/.wmv)",
                        filename
                    ),
                }),
            )
                .into_response();
        }
    };

    match result {
        Ok(report) => (StatusCode::OK, Json(TranscriptionResponse::from(report))).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn transcribe_sample_handler<E, M, S, T, F>(
    State(state): State<AppState<E, M, S, T, F>>,
    Json(body): Json<SampleTranscriptionBody>,
) -> Response
where
    E: TranscriptionEngine + 'static,
    M: MediaExtractor + 'static,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
    F: FileLoader + 'static,
{
    let model = match body.model_size {
        Some(raw) => match ModelSize::from_str(&raw) {
            Ok(m) => m,
            Err(e) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse { error: e }),
                )
                    .into_response();
            }
        },
        None => state.settings.transcription.default_model,
    };

    match state.transcription_service.transcribe_sample(model).await {
        Ok(report) => (StatusCode::OK, Json(TranscriptionResponse::from(report))).into_response(),
        Err(e) => service_error_response(e),
    }
}
