use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::application::ports::{
    FileLoader, MediaExtractor, SpeechSynthesizer, SynthesizerError, TranscriptionEngine,
    Translator, TranslatorError,
};
use crate::application::services::{
    EnglishSynthesisCommand, SynthesisCommand, SynthesisServiceError, SynthesizedSpeech,
};
use crate::domain::VoiceGender;
use crate::presentation::state::AppState;

use super::ErrorResponse;

fn default_rate() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct SynthesizeBody {
    pub text: String,
    pub language: String,
    pub gender: VoiceGender,
    #[serde(default)]
    pub voice_variant: usize,
    #[serde(default = "default_rate")]
    pub speaking_rate: f64,
    #[serde(default)]
    pub translate: bool,
}

#[derive(Debug, Deserialize)]
pub struct EnglishSynthesizeBody {
    pub text: String,
    pub gender: VoiceGender,
    #[serde(default)]
    pub voice_variant: usize,
    #[serde(default = "default_rate")]
    pub speaking_rate: f64,
}

fn audio_response(speech: SynthesizedSpeech) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "audio/mpeg")],
        speech.audio,
    )
        .into_response()
}

fn service_error_response(error: SynthesisServiceError) -> Response {
    let status = match &error {
        SynthesisServiceError::EmptyText
        | SynthesisServiceError::UnknownLanguage(_)
        | SynthesisServiceError::NoVoiceAvailable { .. }
        | SynthesisServiceError::InvalidRate(_)
        | SynthesisServiceError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SynthesisServiceError::Translation(TranslatorError::EmptyText) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SynthesisServiceError::Translation(_) => StatusCode::BAD_GATEWAY,
        SynthesisServiceError::Synthesis(SynthesizerError::EmptyText) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SynthesisServiceError::Synthesis(SynthesizerError::MissingCredentials) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        SynthesisServiceError::Synthesis(_) => StatusCode::BAD_GATEWAY,
    };
    tracing::error!(error = %error, "Synthesis request failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, body), fields(language = %body.language, gender = %body.gender))]
pub async fn synthesize_handler<E, M, S, T, F>(
    State(state): State<AppState<E, M, S, T, F>>,
    Json(body): Json<SynthesizeBody>,
) -> Response
where
    E: TranscriptionEngine + 'static,
    M: MediaExtractor + 'static,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
    F: FileLoader + 'static,
{
    let command = SynthesisCommand {
        text: body.text,
        language: body.language,
        gender: body.gender,
        voice_variant: body.voice_variant,
        speaking_rate: body.speaking_rate,
        translate: body.translate,
    };

    match state.synthesis_service.synthesize(command).await {
        Ok(speech) => audio_response(speech),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, body), fields(gender = %body.gender))]
pub async fn synthesize_english_handler<E, M, S, T, F>(
    State(state): State<AppState<E, M, S, T, F>>,
    Json(body): Json<EnglishSynthesizeBody>,
) -> Response
where
    E: TranscriptionEngine + 'static,
    M: MediaExtractor + 'static,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
    F: FileLoader + 'static,
{
    let command = EnglishSynthesisCommand {
        text: body.text,
        gender: body.gender,
        voice_variant: body.voice_variant,
        speaking_rate: body.speaking_rate,
    };

    match state.synthesis_service.synthesize_english(command).await {
        Ok(speech) => audio_response(speech),
        Err(e) => service_error_response(e),
    }
}
