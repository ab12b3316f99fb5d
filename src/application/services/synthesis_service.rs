use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SynthesizerError, Translator, TranslatorError};
use crate::domain::{
    InvalidSpeakingRate, SessionEvent, SessionState, SpeakingRate, SynthesisSession, VoiceCatalog,
    VoiceGender,
};

/// Multilingual synthesis request, voice selected from the catalog.
#[derive(Debug, Clone)]
pub struct SynthesisCommand {
    pub text: String,
    pub language: String,
    pub gender: VoiceGender,
    pub voice_variant: usize,
    pub speaking_rate: f64,
    pub translate: bool,
}

/// English-only synthesis request against the four-variant voice table.
#[derive(Debug, Clone)]
pub struct EnglishSynthesisCommand {
    pub text: String,
    pub gender: VoiceGender,
    pub voice_variant: usize,
    pub speaking_rate: f64,
}

#[derive(Debug, Clone)]
pub struct SynthesizedSpeech {
    pub audio: Vec<u8>,
    pub text: String,
    pub voice_name: String,
    pub language_code: String,
    pub translated: bool,
    pub final_state: SessionState,
}

pub struct SynthesisService<S, T>
where
    S: SpeechSynthesizer,
    T: Translator,
{
    synthesizer: Arc<S>,
    translator: Arc<T>,
    catalog: Arc<VoiceCatalog>,
}

impl<S, T> SynthesisService<S, T>
where
    S: SpeechSynthesizer,
    T: Translator,
{
    pub fn new(synthesizer: Arc<S>, translator: Arc<T>, catalog: Arc<VoiceCatalog>) -> Self {
        Self {
            synthesizer,
            translator,
            catalog,
        }
    }

    pub async fn synthesize(
        &self,
        command: SynthesisCommand,
    ) -> Result<SynthesizedSpeech, SynthesisServiceError> {
        let text = command.text.trim();
        if text.is_empty() {
            return Err(SynthesisServiceError::EmptyText);
        }
        let rate = SpeakingRate::new(command.speaking_rate)?;

        let profile = self
            .catalog
            .language(&command.language)
            .ok_or_else(|| SynthesisServiceError::UnknownLanguage(command.language.clone()))?;

        let Some(resolved) =
            self.catalog
                .resolve(&command.language, command.gender, command.voice_variant)
        else {
            tracing::warn!(
                language = %profile.display_name,
                gender = %command.gender,
                variant = command.voice_variant,
                "No voice available for selection"
            );
            return Err(SynthesisServiceError::NoVoiceAvailable {
                language: profile.display_name.clone(),
                gender: command.gender,
            });
        };

        let translate_to = command.translate.then(|| resolved.translate_code.clone());
        self.run_attempt(
            text,
            &resolved.voice_name,
            &resolved.language_code,
            rate,
            translate_to.as_deref(),
        )
        .await
    }

    pub async fn synthesize_english(
        &self,
        command: EnglishSynthesisCommand,
    ) -> Result<SynthesizedSpeech, SynthesisServiceError> {
        let text = command.text.trim();
        if text.is_empty() {
            return Err(SynthesisServiceError::EmptyText);
        }
        let rate = SpeakingRate::new(command.speaking_rate)?;

        let Some(voice) = self
            .catalog
            .english_variant(command.gender, command.voice_variant)
        else {
            tracing::warn!(
                gender = %command.gender,
                variant = command.voice_variant,
                "No English voice available for selection"
            );
            return Err(SynthesisServiceError::NoVoiceAvailable {
                language: "English (US)".to_string(),
                gender: command.gender,
            });
        };

        self.run_attempt(text, &voice.voice_name, "en-US", rate, None)
            .await
    }

    /// Drive one synthesis attempt through the session state machine.
    ///
    /// A failed translation aborts the attempt; the untranslated text is
    /// never substituted silently. The caller may re-submit without
    /// translation, which enters a fresh attempt.
    async fn run_attempt(
        &self,
        text: &str,
        voice_name: &str,
        language_code: &str,
        rate: SpeakingRate,
        translate_to: Option<&str>,
    ) -> Result<SynthesizedSpeech, SynthesisServiceError> {
        let mut session = SynthesisSession::new();
        session.apply(SessionEvent::TextProvided);

        let (final_text, translated) = match translate_to {
            Some(target) => {
                session.apply(SessionEvent::TranslationStarted);
                match self.translator.translate(text, target).await {
                    Ok(t) => {
                        session.apply(SessionEvent::TranslationSucceeded);
                        tracing::debug!(target, chars = t.len(), "Text translated before synthesis");
                        (t, true)
                    }
                    Err(e) => {
                        session.apply(SessionEvent::TranslationFailed);
                        tracing::warn!(target, error = %e, "Translation failed, aborting synthesis");
                        return Err(SynthesisServiceError::Translation(e));
                    }
                }
            }
            None => (text.to_string(), false),
        };

        if !session.state().permits_synthesis() {
            return Err(SynthesisServiceError::InvalidState(session.state()));
        }
        session.apply(SessionEvent::SynthesisStarted);

        match self
            .synthesizer
            .synthesize(&final_text, voice_name, language_code, rate)
            .await
        {
            Ok(audio) => {
                session.apply(SessionEvent::SynthesisSucceeded);
                tracing::info!(
                    voice = voice_name,
                    language = language_code,
                    bytes = audio.len(),
                    translated,
                    "Speech synthesized"
                );
                Ok(SynthesizedSpeech {
                    audio,
                    text: final_text,
                    voice_name: voice_name.to_string(),
                    language_code: language_code.to_string(),
                    translated,
                    final_state: session.state(),
                })
            }
            Err(e) => {
                session.apply(SessionEvent::SynthesisFailed);
                Err(SynthesisServiceError::Synthesis(e))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisServiceError {
    #[error("input text is empty")]
    EmptyText,
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("no {gender} voice available for {language}")]
    NoVoiceAvailable {
        language: String,
        gender: VoiceGender,
    },
    #[error(transparent)]
    InvalidRate(#[from] InvalidSpeakingRate),
    #[error("synthesis not permitted from state {0:?}")]
    InvalidState(SessionState),
    #[error("translation: {0}")]
    Translation(#[from] TranslatorError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesizerError),
}
