//! Shared fixtures for the mock-server tests
#![allow(dead_code)]

use bitfinex::core::kernel::ReqwestRest;
use bitfinex::{BitfinexBuilder, BitfinexConnector};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_SECRET: &str = "test-secret";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Connector with credentials, pointed at the mock server
pub fn authenticated_connector(server: &MockServer) -> BitfinexConnector<ReqwestRest> {
    BitfinexBuilder::new()
        .with_base_url(server.uri())
        .with_credentials(TEST_API_KEY.to_string(), TEST_SECRET.to_string())
        .build()
        .expect("connector should build")
}

/// Connector without credentials, pointed at the mock server
pub fn public_connector(server: &MockServer) -> BitfinexConnector<ReqwestRest> {
    BitfinexBuilder::new()
        .with_base_url(server.uri())
        .build()
        .expect("connector should build")
}

/// Header value of a recorded request as a string
pub fn header_value(request: &wiremock::Request, name: &str) -> String {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {}", name))
        .to_str()
        .expect("header is ascii")
        .to_string()
}
