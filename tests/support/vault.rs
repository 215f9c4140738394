//! Mock Vault HTTP API.

use serde_json::Value;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A wiremock server standing in for Vault.
///
/// Tests stay synchronous; the server's futures run on a private runtime.
pub struct MockVault {
    server: MockServer,
    runtime: Runtime,
}

impl MockVault {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("failed to start tokio runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Base URL for `VAULT_ADDR`.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mount an arbitrary mock.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Answer reads of `secret_path` carrying `token` with `status` and `body`.
    pub fn respond(&self, secret_path: &str, token: &str, status: u16, body: Value) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("/v1/{secret_path}")))
                .and(header("X-Vault-Token", token))
                .respond_with(ResponseTemplate::new(status).set_body_json(body)),
        );
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.runtime
            .block_on(self.server.received_requests())
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
