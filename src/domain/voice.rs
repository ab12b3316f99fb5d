use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
}

impl VoiceGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named voice variant within one (language, gender) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceVariant {
    pub display_name: String,
    pub voice_name: String,
}

/// One supported synthesis language: its BCP-47 synthesis code, its
/// two-letter translation code, and the voices offered per gender.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageProfile {
    pub display_name: String,
    pub language_code: String,
    pub translate_code: String,
    pub male: Vec<VoiceVariant>,
    pub female: Vec<VoiceVariant>,
}

impl LanguageProfile {
    pub fn voices_for(&self, gender: VoiceGender) -> &[VoiceVariant] {
        match gender {
            VoiceGender::Male => &self.male,
            VoiceGender::Female => &self.female,
        }
    }
}

/// A voice resolved for a concrete synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVoice {
    pub voice_name: String,
    pub language_code: String,
    pub translate_code: String,
}

/// Read-only catalog of synthesis voices. Built once at startup, never
/// mutated.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceCatalog {
    pub languages: Vec<LanguageProfile>,
    pub english_male: Vec<VoiceVariant>,
    pub english_female: Vec<VoiceVariant>,
}

fn variant(display_name: &str, voice_name: &str) -> VoiceVariant {
    VoiceVariant {
        display_name: display_name.to_string(),
        voice_name: voice_name.to_string(),
    }
}

fn numbered(gender: VoiceGender, voice_names: &[&str]) -> Vec<VoiceVariant> {
    voice_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let tier = name.rsplit('-').next().unwrap_or(name);
            variant(
                &format!(
                    "{} Variant {} ({})",
                    match gender {
                        VoiceGender::Male => "Male",
                        VoiceGender::Female => "Female",
                    },
                    i + 1,
                    tier
                ),
                name,
            )
        })
        .collect()
}

fn profile(
    display_name: &str,
    language_code: &str,
    translate_code: &str,
    male: &[&str],
    female: &[&str],
) -> LanguageProfile {
    LanguageProfile {
        display_name: display_name.to_string(),
        language_code: language_code.to_string(),
        translate_code: translate_code.to_string(),
        male: numbered(VoiceGender::Male, male),
        female: numbered(VoiceGender::Female, female),
    }
}

impl VoiceCatalog {
    pub fn builtin() -> Self {
        Self {
            languages: vec![
                profile(
                    "English (US)",
                    "en-US",
                    "en",
                    &["en-US-Wavenet-A", "en-US-Neural2-D"],
                    &["en-US-Wavenet-E", "en-US-Neural2-F"],
                ),
                profile(
                    "Spanish (Spain)",
                    "es-ES",
                    "es",
                    &["es-ES-Wavenet-B", "es-ES-Neural2-D"],
                    &["es-ES-Wavenet-A", "es-ES-Neural2-C"],
                ),
                profile(
                    "French (France)",
                    "fr-FR",
                    "fr",
                    &["fr-FR-Wavenet-B", "fr-FR-Neural2-D"],
                    &["fr-FR-Wavenet-A", "fr-FR-Neural2-C"],
                ),
                profile(
                    "German (Germany)",
                    "de-DE",
                    "de",
                    &["de-DE-Wavenet-B", "de-DE-Neural2-D"],
                    &["de-DE-Wavenet-A", "de-DE-Neural2-C"],
                ),
                profile(
                    "Hindi (India)",
                    "hi-IN",
                    "hi",
                    &["hi-IN-Wavenet-B", "hi-IN-Neural2-D"],
                    &["hi-IN-Wavenet-A", "hi-IN-Neural2-C"],
                ),
                profile(
                    "Japanese (Japan)",
                    "ja-JP",
                    "ja",
                    &["ja-JP-Wavenet-C", "ja-JP-Neural2-D"],
                    &["ja-JP-Wavenet-A", "ja-JP-Neural2-B"],
                ),
                profile(
                    "Mandarin Chinese (CN)",
                    "cmn-CN",
                    "zh",
                    &["cmn-CN-Wavenet-B", "cmn-CN-Wavenet-D"],
                    &["cmn-CN-Wavenet-A", "cmn-CN-Wavenet-C"],
                ),
            ],
            english_male: vec![
                variant("Male Variant 1 (Standard)", "en-US-Standard-D"),
                variant("Male Variant 2 (WaveNet)", "en-US-Wavenet-D"),
                variant("Male Variant 3 (Neural2)", "en-US-Neural2-J"),
                variant("Male Variant 4 (Studio)", "en-US-Studio-M"),
            ],
            english_female: vec![
                variant("Female Variant 1 (Standard)", "en-US-Standard-C"),
                variant("Female Variant 2 (WaveNet)", "en-US-Wavenet-F"),
                variant("Female Variant 3 (Neural2)", "en-US-Neural2-H"),
                variant("Female Variant 4 (Studio)", "en-US-Studio-O"),
            ],
        }
    }

    /// Look up a language by display name, synthesis code, or translation
    /// code, case-insensitively.
    pub fn language(&self, query: &str) -> Option<&LanguageProfile> {
        let q = query.trim().to_lowercase();
        self.languages.iter().find(|p| {
            p.display_name.to_lowercase() == q
                || p.language_code.to_lowercase() == q
                || p.translate_code.to_lowercase() == q
        })
    }

    /// Resolve the voice for a (language, gender, variant) selection. Returns
    /// `None` when the language is known but carries no voice for that gender
    /// and variant; callers treat this as a validation warning.
    pub fn resolve(
        &self,
        language: &str,
        gender: VoiceGender,
        variant_index: usize,
    ) -> Option<ResolvedVoice> {
        let profile = self.language(language)?;
        let voice = profile.voices_for(gender).get(variant_index)?;
        Some(ResolvedVoice {
            voice_name: voice.voice_name.clone(),
            language_code: profile.language_code.clone(),
            translate_code: profile.translate_code.clone(),
        })
    }

    pub fn english_variant(&self, gender: VoiceGender, variant_index: usize) -> Option<&VoiceVariant> {
        match gender {
            VoiceGender::Male => self.english_male.get(variant_index),
            VoiceGender::Female => self.english_female.get(variant_index),
        }
    }
}
