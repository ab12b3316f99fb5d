use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{
    FileLoader, MediaExtractor, SpeechSynthesizer, TranscriptionEngine, Translator,
};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    extract_handler, health_handler, synthesize_english_handler, synthesize_handler,
    transcribe_handler, transcribe_sample_handler, translate_handler, voices_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E, M, S, T, F>(state: AppState<E, M, S, T, F>) -> Router
where
    E: TranscriptionEngine + 'static,
    M: MediaExtractor + 'static,
    S: SpeechSynthesizer + 'static,
    T: Translator + 'static,
    F: FileLoader + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/voices", get(voices_handler::<E, M, S, T, F>))
        .route(
            "/api/v1/transcriptions",
            post(transcribe_handler::<E, M, S, T, F>),
        )
        .route(
            "/api/v1/transcriptions/sample",
            post(transcribe_sample_handler::<E, M, S, T, F>),
        )
        .route(
            "/api/v1/syntheses",
            post(synthesize_handler::<E, M, S, T, F>),
        )
        .route(
            "/api/v1/syntheses/english",
            post(synthesize_english_handler::<E, M, S, T, F>),
        )
        .route(
            "/api/v1/translations",
            post(translate_handler::<E, M, S, T, F>),
        )
        .route(
            "/api/v1/extractions",
            post(extract_handler::<E, M, S, T, F>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
