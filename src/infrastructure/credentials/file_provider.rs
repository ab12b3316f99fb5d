use std::path::{Path, PathBuf};

use crate::application::ports::{ApiCredentials, CredentialsProvider};

/// Reads credentials from a local JSON file carrying an `api_key` field.
pub struct FileCredentialsProvider {
    path: PathBuf,
}

impl FileCredentialsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub(super) fn read_credentials_file(path: &Path) -> Option<ApiCredentials> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Credentials file not readable");
            return None;
        }
    };

    let parsed: serde_json::Value = match serde_json::from_str(&contents) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Credentials file is not valid JSON");
            return None;
        }
    };

    let api_key = parsed.get("api_key").and_then(|v| v.as_str())?;
    if api_key.is_empty() {
        return None;
    }

    Some(ApiCredentials {
        api_key: api_key.to_string(),
    })
}

impl CredentialsProvider for FileCredentialsProvider {
    fn name(&self) -> &'static str {
        "credentials-file"
    }

    fn resolve(&self) -> Option<ApiCredentials> {
        read_credentials_file(&self.path)
    }
}
