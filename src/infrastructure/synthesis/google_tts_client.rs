use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ApiCredentials, SpeechSynthesizer, SynthesizerError};
use crate::domain::SpeakingRate;

pub const DEFAULT_TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1";

/// Client for the Google Cloud Text-to-Speech REST API. Always requests MP3;
/// the response's base64 `audioContent` is decoded into the returned buffer.
pub struct GoogleTtsClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<ApiCredentials>,
}

impl GoogleTtsClient {
    pub fn new(base_url: &str, credentials: Option<ApiCredentials>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }
}

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct VoiceSelection<'a> {
    #[serde(rename = "languageCode")]
    language_code: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct AudioConfig {
    #[serde(rename = "audioEncoding")]
    audio_encoding: &'static str,
    #[serde(rename = "speakingRate")]
    speaking_rate: f64,
}

#[derive(Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        voice_name: &str,
        language_code: &str,
        rate: SpeakingRate,
    ) -> Result<Vec<u8>, SynthesizerError> {
        if text.trim().is_empty() {
            return Err(SynthesizerError::EmptyText);
        }
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SynthesizerError::MissingCredentials)?;

        let url = format!("{}/text:synthesize", self.base_url);
        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code,
                name: voice_name,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: rate.value(),
            },
        };

        tracing::debug!(voice = voice_name, language = language_code, "Sending synthesis request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", credentials.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SynthesizerError::ApiRequestFailed(format!("parse response: {}", e)))?;

        let audio = base64::engine::general_purpose::STANDARD
            .decode(result.audio_content.as_bytes())
            .map_err(|e| SynthesizerError::ApiRequestFailed(format!("decode audio: {}", e)))?;

        tracing::info!(bytes = audio.len(), "Speech synthesis completed");

        Ok(audio)
    }
}
