use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    FileLoader, MediaExtractor, SpeechSynthesizer, TranscriptionEngine, Translator,
    TranslatorError,
};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    pub text: String,
    pub target_lang: String,
}

#[derive(Serialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

#[tracing::instrument(skip(state, body), fields(target = %body.target_lang))]
pub async fn translate_handler<E, M, S, T, F>(
    State(state): State<AppState<E, M, S, T, F>>,
    Json(body): Json<TranslateBody>,
) -> Response
where
    E: TranscriptionEngine + 'static,
    M: MediaExtractor + 'static,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
    F: FileLoader + 'static,
{
    match state.translator.translate(&body.text, &body.target_lang).await {
        Ok(translated_text) => {
            (StatusCode::OK, Json(TranslationResponse { translated_text })).into_response()
        }
        Err(e) => {
            let status = match &e {
                TranslatorError::EmptyText => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_GATEWAY,
            };
            tracing::error!(error = %e, "Translation request failed");
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
