use crate::application::ports::{ApiCredentials, CredentialsProvider};

/// Ordered list of credential sources, queried front to back. The first
/// provider to yield credentials wins; an empty result is a warning at
/// startup, not a fatal error.
pub struct CredentialsChain {
    providers: Vec<Box<dyn CredentialsProvider>>,
}

impl CredentialsChain {
    pub fn new(providers: Vec<Box<dyn CredentialsProvider>>) -> Self {
        Self { providers }
    }

    pub fn resolve(&self) -> Option<ApiCredentials> {
        for provider in &self.providers {
            if let Some(credentials) = provider.resolve() {
                tracing::info!(provider = provider.name(), "Synthesis credentials resolved");
                return Some(credentials);
            }
        }

        tracing::warn!(
            "No synthesis credentials found; synthesis requests will fail until configured"
        );
        None
    }
}
