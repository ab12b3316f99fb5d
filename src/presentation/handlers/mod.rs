mod extract;
mod health;
mod synthesize;
mod transcribe;
mod translate;
mod voices;

use serde::Serialize;

pub use extract::extract_handler;
pub use health::health_handler;
pub use synthesize::{synthesize_english_handler, synthesize_handler};
pub use transcribe::{transcribe_handler, transcribe_sample_handler};
pub use translate::translate_handler;
pub use voices::voices_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
