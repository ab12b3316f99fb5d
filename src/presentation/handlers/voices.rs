use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::{
    FileLoader, MediaExtractor, SpeechSynthesizer, TranscriptionEngine, Translator,
};
use crate::presentation::state::AppState;

pub async fn voices_handler<E, M, S, T, F>(
    State(state): State<AppState<E, M, S, T, F>>,
) -> Response
where
    E: TranscriptionEngine + 'static,
    M: MediaExtractor + 'static,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
    F: FileLoader + 'static,
{
    (StatusCode::OK, Json((*state.voice_catalog).clone())).into_response()
}
