use async_trait::async_trait;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("input text is empty")]
    EmptyText,
    #[error("translation request failed: {0}")]
    RequestFailed(String),
    #[error("translation endpoint returned status {0}")]
    UnexpectedStatus(u16),
    #[error("malformed translation response: {0}")]
    MalformedResponse(String),
}
