use paysafe_payments::{Environment, PaysafeClient};

pub struct TestContext {
    pub client: PaysafeClient,
}

impl TestContext {
    pub async fn start() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        // Take the API key of the TEST merchant account from the env
        let api_key = std::env::var("ACCEPTANCE_TESTS_API_KEY").unwrap();

        let client = PaysafeClient::builder(api_key)
            .with_environment(Environment::Test)
            .build()
            .unwrap();

        Self { client }
    }

    pub fn client_with_api_key(&self, api_key: &str) -> PaysafeClient {
        PaysafeClient::builder(api_key)
            .with_environment(Environment::Test)
            .build()
            .unwrap()
    }
}
