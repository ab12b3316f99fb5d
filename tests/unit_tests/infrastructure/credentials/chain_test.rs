use std::io::Write;
use std::path::Path;

use voxsuite::application::ports::CredentialsProvider;
use voxsuite::infrastructure::credentials::{
    CredentialsChain, EnvCredentialsProvider, FileCredentialsProvider,
};

fn write_credentials_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn given_valid_credentials_file_when_resolving_then_api_key_returned() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_credentials_file(dir.path(), "creds.json", r#"{"api_key": "abc123"}"#);

    let provider = FileCredentialsProvider::new(path);
    let credentials = provider.resolve().unwrap();

    assert_eq!(credentials.api_key, "abc123");
}

#[test]
fn given_missing_file_when_resolving_then_none() {
    let provider = FileCredentialsProvider::new("/nonexistent/creds.json");
    assert!(provider.resolve().is_none());
}

#[test]
fn given_file_without_api_key_when_resolving_then_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_credentials_file(dir.path(), "creds.json", r#"{"project_id": "demo"}"#);

    let provider = FileCredentialsProvider::new(path);
    assert!(provider.resolve().is_none());
}

#[test]
fn given_env_var_pointing_at_file_when_resolving_then_api_key_returned() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_credentials_file(dir.path(), "creds.json", r#"{"api_key": "from-env"}"#);

    std::env::set_var("VOX_TEST_CREDS_ENV_OK", path.to_str().unwrap());
    let provider = EnvCredentialsProvider::new("VOX_TEST_CREDS_ENV_OK");

    let credentials = provider.resolve().unwrap();
    assert_eq!(credentials.api_key, "from-env");
}

#[test]
fn given_unset_env_var_when_resolving_then_none() {
    let provider = EnvCredentialsProvider::new("VOX_TEST_CREDS_ENV_UNSET");
    assert!(provider.resolve().is_none());
}

#[test]
fn given_chain_when_first_provider_resolves_then_it_wins() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_credentials_file(dir.path(), "first.json", r#"{"api_key": "first"}"#);
    let second = write_credentials_file(dir.path(), "second.json", r#"{"api_key": "second"}"#);

    let chain = CredentialsChain::new(vec![
        Box::new(FileCredentialsProvider::new(first)),
        Box::new(FileCredentialsProvider::new(second)),
    ]);

    assert_eq!(chain.resolve().unwrap().api_key, "first");
}

#[test]
fn given_chain_when_first_provider_fails_then_next_is_queried() {
    let dir = tempfile::tempdir().unwrap();
    let second = write_credentials_file(dir.path(), "second.json", r#"{"api_key": "second"}"#);

    let chain = CredentialsChain::new(vec![
        Box::new(FileCredentialsProvider::new("/nonexistent/creds.json")),
        Box::new(FileCredentialsProvider::new(second)),
    ]);

    assert_eq!(chain.resolve().unwrap().api_key, "second");
}

#[test]
fn given_chain_when_no_provider_resolves_then_none() {
    let chain = CredentialsChain::new(vec![
        Box::new(FileCredentialsProvider::new("/nonexistent/a.json")),
        Box::new(EnvCredentialsProvider::new("VOX_TEST_CREDS_ENV_UNSET_2")),
    ]);

    assert!(chain.resolve().is_none());
}
