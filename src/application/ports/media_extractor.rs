use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Extract the audio track of `video_path` into `audio_path`. Single
    /// attempt; an existing output file is overwritten.
    async fn extract_audio(
        &self,
        video_path: &Path,
        audio_path: &Path,
    ) -> Result<(), MediaExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaExtractorError {
    #[error("failed to launch media tool: {0}")]
    SpawnFailed(String),
    #[error("audio extraction failed: {0}")]
    ExtractionFailed(String),
}
