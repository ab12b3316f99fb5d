use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use voxsuite::application::services::{
    SynthesisService, TextExtractionService, TranscriptionService,
};
use voxsuite::domain::VoiceCatalog;
use voxsuite::infrastructure::audio::{FfmpegExtractor, WhisperEngine};
use voxsuite::infrastructure::credentials::{
    CredentialsChain, EnvCredentialsProvider, FileCredentialsProvider,
};
use voxsuite::infrastructure::observability::{init_tracing, TracingConfig};
use voxsuite::infrastructure::synthesis::GoogleTtsClient;
use voxsuite::infrastructure::text_processing::CompositeFileLoader;
use voxsuite::infrastructure::translation::GtxTranslateClient;
use voxsuite::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let credentials = CredentialsChain::new(vec![
        Box::new(FileCredentialsProvider::new(
            settings.synthesis.credentials_path.clone(),
        )),
        Box::new(EnvCredentialsProvider::new(
            settings.synthesis.credentials_env.clone(),
        )),
    ])
    .resolve();

    if !settings.transcription.sample_audio_path.exists() {
        tracing::warn!(
            path = %settings.transcription.sample_audio_path.display(),
            "Sample audio not found; sample transcription will be unavailable"
        );
    }

    let engine = Arc::new(WhisperEngine::new(settings.transcription.models_dir.clone()));
    let extractor = Arc::new(FfmpegExtractor::default());
    let synthesizer = Arc::new(GoogleTtsClient::new(&settings.synthesis.endpoint, credentials));
    let translator = Arc::new(GtxTranslateClient::new(&settings.translation.endpoint));
    let file_loader = Arc::new(CompositeFileLoader::with_builtin_adapters());
    let voice_catalog = Arc::new(VoiceCatalog::builtin());

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::clone(&engine),
        Arc::clone(&extractor),
        settings.transcription.sample_audio_path.clone(),
    ));
    let synthesis_service = Arc::new(SynthesisService::new(
        Arc::clone(&synthesizer),
        Arc::clone(&translator),
        Arc::clone(&voice_catalog),
    ));
    let extraction_service = Arc::new(TextExtractionService::new(Arc::clone(&file_loader)));

    let state = AppState {
        transcription_service,
        synthesis_service,
        extraction_service,
        translator,
        voice_catalog,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
