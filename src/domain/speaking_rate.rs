use serde::Serialize;

/// Tempo multiplier for synthesized speech, 1.0 = natural pace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpeakingRate(f64);

#[derive(Debug, thiserror::Error)]
#[error("speaking rate {0} outside supported range 0.25..=2.0")]
pub struct InvalidSpeakingRate(pub f64);

impl SpeakingRate {
    pub const MIN: f64 = 0.25;
    pub const MAX: f64 = 2.0;

    pub fn new(value: f64) -> Result<Self, InvalidSpeakingRate> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(InvalidSpeakingRate(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for SpeakingRate {
    fn default() -> Self {
        Self(1.0)
    }
}
