mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ServerSettings, Settings, SynthesisSettings, TranscriptionSettings, TranslationSettings,
};
