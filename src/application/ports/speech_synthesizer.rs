use async_trait::async_trait;

use crate::domain::SpeakingRate;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` into one complete encoded audio buffer (MP3).
    async fn synthesize(
        &self,
        text: &str,
        voice_name: &str,
        language_code: &str,
        rate: SpeakingRate,
    ) -> Result<Vec<u8>, SynthesizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesizerError {
    #[error("input text is empty")]
    EmptyText,
    #[error("no synthesis credentials configured")]
    MissingCredentials,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
