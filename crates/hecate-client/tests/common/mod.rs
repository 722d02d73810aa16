/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for hecate-client tests

use hecate_client::{ClientConfig, HecateClient, TaskDraft};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> HecateClient {
    HecateClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client should build")
}

/// A draft that passes form validation
pub fn valid_draft() -> TaskDraft {
    TaskDraft {
        name: "Drain node".to_string(),
        description: "Drain node-7 before maintenance".to_string(),
        ..TaskDraft::default()
    }
}

/// Mock bearer token for testing
pub fn mock_api_token() -> String {
    "hecate-test-token".to_string()
}
