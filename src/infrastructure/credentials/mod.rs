mod chain;
mod env_provider;
mod file_provider;

pub use chain::CredentialsChain;
pub use env_provider::EnvCredentialsProvider;
pub use file_provider::FileCredentialsProvider;
