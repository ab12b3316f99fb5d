mod document;
mod model_size;
mod session;
mod speaking_rate;
mod transcript;
mod voice;

pub use document::{ContentType, Document};
pub use model_size::ModelSize;
pub use session::{SessionEvent, SessionState, SynthesisSession};
pub use speaking_rate::{InvalidSpeakingRate, SpeakingRate};
pub use transcript::{Transcript, TranscriptSegment};
pub use voice::{LanguageProfile, ResolvedVoice, VoiceCatalog, VoiceGender, VoiceVariant};
