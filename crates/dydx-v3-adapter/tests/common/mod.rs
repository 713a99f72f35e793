/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for dydx-v3-adapter tests

use dydx_v3_adapter::DydxClient;
use wiremock::MockServer;

pub const ADDRESS_1: &str = "0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C0";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn mock_client(server: &MockServer) -> DydxClient {
    DydxClient::new(&server.uri()).expect("client init")
}
