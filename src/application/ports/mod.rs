mod credentials_provider;
mod file_loader;
mod media_extractor;
mod speech_synthesizer;
mod transcription_engine;
mod translator;

pub use credentials_provider::{ApiCredentials, CredentialsProvider};
pub use file_loader::{FileLoader, FileLoaderError};
pub use media_extractor::{MediaExtractor, MediaExtractorError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesizerError};
pub use transcription_engine::{AudioSource, TranscriptionEngine, TranscriptionError};
pub use translator::{Translator, TranslatorError};
