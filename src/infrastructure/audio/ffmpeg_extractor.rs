use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{MediaExtractor, MediaExtractorError};

/// Extracts the audio track of a video by shelling out to ffmpeg:
/// best audio stream, no video, MP3 container, overwrite if present.
pub struct FfmpegExtractor {
    program: String,
}

impl FfmpegExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl MediaExtractor for FfmpegExtractor {
    async fn extract_audio(
        &self,
        video_path: &Path,
        audio_path: &Path,
    ) -> Result<(), MediaExtractorError> {
        tracing::debug!(
            program = %self.program,
            video = %video_path.display(),
            "Extracting audio track"
        );

        let output = Command::new(&self.program)
            .arg("-i")
            .arg(video_path)
            .args(["-q:a", "0", "-map", "a", "-vn"])
            .arg(audio_path)
            .arg("-y")
            .output()
            .await
            .map_err(|e| MediaExtractorError::SpawnFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(MediaExtractorError::ExtractionFailed(stderr));
        }

        Ok(())
    }
}
