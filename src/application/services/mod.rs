mod synthesis_service;
mod text_extraction_service;
mod transcription_service;

pub use synthesis_service::{
    EnglishSynthesisCommand, SynthesisCommand, SynthesisService, SynthesisServiceError,
    SynthesizedSpeech,
};
pub use text_extraction_service::{ExtractedText, TextExtractionService};
pub use transcription_service::{TranscriptionReport, TranscriptionService, TranscriptionServiceError};
