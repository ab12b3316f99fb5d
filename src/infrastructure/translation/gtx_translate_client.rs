use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{Translator, TranslatorError};

pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the public `gtx` translation endpoint. The response is a
/// nested array; the translated text is the concatenation of the first
/// element of every entry of the first top-level array.
pub struct GtxTranslateClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GtxTranslateClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl Translator for GtxTranslateClient {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslatorError> {
        if text.trim().is_empty() {
            return Err(TranslatorError::EmptyText);
        }

        tracing::debug!(target = target_lang, chars = text.len(), "Sending translation request");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslatorError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslatorError::UnexpectedStatus(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslatorError::MalformedResponse(e.to_string()))?;

        let sentences = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| TranslatorError::MalformedResponse("missing sentence array".to_string()))?;

        let translated: String = sentences
            .iter()
            .filter_map(|entry| entry.get(0).and_then(Value::as_str))
            .collect();

        tracing::info!(target = target_lang, chars = translated.len(), "Translation completed");

        Ok(translated)
    }
}
