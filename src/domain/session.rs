/// State of one multilingual synthesis attempt.
///
/// Replaces ambient navigation flags with an explicit transition function:
/// state is owned by the in-flight request and advanced event by event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    TextReady,
    Translating,
    Translated,
    TranslationFailed,
    Synthesizing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    TextProvided,
    TranslationStarted,
    TranslationSucceeded,
    TranslationFailed,
    SynthesisStarted,
    SynthesisSucceeded,
    SynthesisFailed,
}

impl SessionState {
    /// Pure transition function. Events that are not legal in the current
    /// state leave it unchanged.
    pub fn advance(self, event: SessionEvent) -> SessionState {
        use SessionEvent as E;
        use SessionState as S;

        match (self, event) {
            // Providing text (re)starts an attempt, including after a failed
            // translation when the caller re-submits without it.
            (S::Idle | S::TranslationFailed | S::Succeeded | S::Failed, E::TextProvided) => {
                S::TextReady
            }
            (S::TextReady, E::TranslationStarted) => S::Translating,
            (S::Translating, E::TranslationSucceeded) => S::Translated,
            (S::Translating, E::TranslationFailed) => S::TranslationFailed,
            (S::TextReady | S::Translated, E::SynthesisStarted) => S::Synthesizing,
            (S::Synthesizing, E::SynthesisSucceeded) => S::Succeeded,
            (S::Synthesizing, E::SynthesisFailed) => S::Failed,
            (current, _) => current,
        }
    }

    /// Synthesis may only start from text that is ready, either untranslated
    /// or successfully translated. A failed translation never reaches
    /// synthesis within the same attempt.
    pub fn permits_synthesis(&self) -> bool {
        matches!(self, SessionState::TextReady | SessionState::Translated)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Succeeded | SessionState::Failed | SessionState::TranslationFailed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisSession {
    state: SessionState,
}

impl SynthesisSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn apply(&mut self, event: SessionEvent) -> SessionState {
        self.state = self.state.advance(event);
        self.state
    }
}

impl Default for SynthesisSession {
    fn default() -> Self {
        Self::new()
    }
}
