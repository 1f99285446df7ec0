use crate::common::mock_server::PaysafeMockServer;
use paysafe_payments::{Environment, PaysafeClient};
use uuid::Uuid;

pub struct TestContext {
    pub client: PaysafeClient,
    mock_server: PaysafeMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        // Generate a new random API key for this specific test
        let api_key = format!(
            "{}:B-qa2-0-{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        );

        let mock_server = PaysafeMockServer::start(&api_key).await;
        let client = PaysafeClient::builder(api_key)
            .with_environment(Environment::Test)
            .with_base_url(mock_server.url())
            .with_max_automatic_retries(0) // Disable retries against the mock server
            .build()
            .unwrap();

        Self {
            client,
            mock_server,
        }
    }

    /// Builds another client against the same server, with the given API key.
    pub fn client_with_api_key(&self, api_key: &str) -> PaysafeClient {
        PaysafeClient::builder(api_key)
            .with_base_url(self.mock_server.url())
            .with_max_automatic_retries(0)
            .build()
            .unwrap()
    }

    pub fn mock_server(&self) -> &PaysafeMockServer {
        &self.mock_server
    }
}
