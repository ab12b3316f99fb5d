/// Credentials for the synthesis capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_key: String,
}

/// One source of synthesis credentials. Providers are queried in a fixed
/// order; the first to yield credentials wins.
pub trait CredentialsProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn resolve(&self) -> Option<ApiCredentials>;
}
