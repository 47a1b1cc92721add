//! Common helpers for mocked E-utilities tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use papers_client::{ClientConfig, PubMedClient};
use wiremock::MockServer;

/// Read a fixture from `tests/integration/test_data`
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/integration/test_data")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// Configuration pointing at a mock server
pub fn mock_config(mock_server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_debug(true)
}

/// Client pointing at a mock server
pub fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    PubMedClient::with_config(mock_config(mock_server)).expect("client should build")
}
