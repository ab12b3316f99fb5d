use serde::{Deserialize, Serialize};

/// A time-bounded span of recognized speech, timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start_secs: f64,
    pub end_secs: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub full_text: String,
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Segments are kept ordered by non-decreasing start time.
    pub fn new(full_text: String, mut segments: Vec<TranscriptSegment>) -> Self {
        segments.sort_by(|a, b| {
            a.start_secs
                .partial_cmp(&b.start_secs)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            full_text,
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_text.trim().is_empty()
    }
}
