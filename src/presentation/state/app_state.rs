use std::sync::Arc;

use crate::application::ports::{
    FileLoader, MediaExtractor, SpeechSynthesizer, TranscriptionEngine, Translator,
};
use crate::application::services::{SynthesisService, TextExtractionService, TranscriptionService};
use crate::domain::VoiceCatalog;
use crate::presentation::config::Settings;

pub struct AppState<E, M, S, T, F>
where
    E: TranscriptionEngine,
    M: MediaExtractor,
    S: SpeechSynthesizer,
    T: Translator,
    F: FileLoader,
{
    pub transcription_service: Arc<TranscriptionService<E, M>>,
    pub synthesis_service: Arc<SynthesisService<S, T>>,
    pub extraction_service: Arc<TextExtractionService<F>>,
    pub translator: Arc<T>,
    pub voice_catalog: Arc<VoiceCatalog>,
    pub settings: Settings,
}

impl<E, M, S, T, F> Clone for AppState<E, M, S, T, F>
where
    E: TranscriptionEngine,
    M: MediaExtractor,
    S: SpeechSynthesizer,
    T: Translator,
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            synthesis_service: Arc::clone(&self.synthesis_service),
            extraction_service: Arc::clone(&self.extraction_service),
            translator: Arc::clone(&self.translator),
            voice_catalog: Arc::clone(&self.voice_catalog),
            settings: self.settings.clone(),
        }
    }
}
