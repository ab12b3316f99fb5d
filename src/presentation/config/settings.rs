use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::domain::ModelSize;
use crate::infrastructure::synthesis::DEFAULT_TTS_ENDPOINT;
use crate::infrastructure::translation::DEFAULT_TRANSLATE_ENDPOINT;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub synthesis: SynthesisSettings,
    pub translation: TranslationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub models_dir: PathBuf,
    /// Injected sample location; never a hard-coded literal in code paths.
    pub sample_audio_path: PathBuf,
    pub default_model: ModelSize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub endpoint: String,
    pub credentials_path: PathBuf,
    pub credentials_env: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub endpoint: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::try_from(env_or("APP_ENV", "local"))
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: env_or("VOX_SERVER_HOST", "0.0.0.0"),
                port: std::env::var("VOX_SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            transcription: TranscriptionSettings {
                models_dir: PathBuf::from(env_or("VOX_MODELS_DIR", "models")),
                sample_audio_path: PathBuf::from(env_or(
                    "VOX_SAMPLE_AUDIO_PATH",
                    "samples/jfk.mp3",
                )),
                default_model: std::env::var("VOX_DEFAULT_MODEL")
                    .ok()
                    .and_then(|m| ModelSize::from_str(&m).ok())
                    .unwrap_or(ModelSize::Base),
            },
            synthesis: SynthesisSettings {
                endpoint: env_or("VOX_TTS_ENDPOINT", DEFAULT_TTS_ENDPOINT),
                credentials_path: PathBuf::from(env_or(
                    "VOX_TTS_CREDENTIALS_PATH",
                    "google_credentials.json",
                )),
                credentials_env: env_or("VOX_TTS_CREDENTIALS_ENV", "GOOGLE_APPLICATION_CREDENTIALS"),
            },
            translation: TranslationSettings {
                endpoint: env_or("VOX_TRANSLATE_ENDPOINT", DEFAULT_TRANSLATE_ENDPOINT),
            },
        }
    }
}
