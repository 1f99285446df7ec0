//! Module containing the main Paysafe Payments API client.

use crate::{
    apis::{
        customer_addresses::CustomerAddressesApi,
        customer_payment_handles::CustomerPaymentHandlesApi,
        customer_single_use_tokens::CustomerSingleUseTokensApi, customers::CustomersApi,
        monitor::MonitorApi, original_credits::OriginalCreditsApi,
        payment_handles::PaymentHandlesApi, payment_methods::PaymentMethodsApi,
        payments::PaymentsApi, refunds::RefundsApi, settlements::SettlementsApi,
        standalone_credits::StandaloneCreditsApi, verifications::VerificationsApi,
        void_authorizations::VoidAuthorizationsApi, PaysafeClientInner,
    },
    auth::ApiKey,
    common::{
        DEFAULT_CONNECT_TIMEOUT, DEFAULT_LIVE_URL, DEFAULT_MAX_AUTOMATIC_RETRIES,
        DEFAULT_RESPONSE_TIMEOUT, DEFAULT_TEST_URL, MESSAGE_CONNECT_TIMEOUT_NOT_POSITIVE,
        MESSAGE_RESPONSE_TIMEOUT_NOT_POSITIVE,
    },
    error::Error,
    middlewares::{
        authentication::AuthenticationMiddleware,
        error_handling::ErrorHandlingMiddleware,
        inject_headers::InjectHeadersMiddleware,
        retry_connection_failure::{
            ConnectionRetryPolicy, DynRetryPolicy, RetryConnectionFailureMiddleware,
        },
    },
    options::{validate_max_automatic_retries, validate_timeout},
};
use reqwest::{Certificate, Proxy, Url};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use std::{sync::Arc, time::Duration};

/// Paysafe environment to connect to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Environment {
    /// Production environment, processing real transactions.
    Live,
    /// Merchant test environment, where non-GET requests are handled by a simulator.
    Test,
}

impl Environment {
    /// Default base URL of this environment.
    pub fn url(&self) -> Url {
        let url = match self {
            Environment::Live => DEFAULT_LIVE_URL,
            Environment::Test => DEFAULT_TEST_URL,
        };

        // Both constants are valid absolute URLs
        Url::parse(url).unwrap()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Test
    }
}

/// Client for the Paysafe Payments APIs.
///
/// Every API shares the same pooled HTTP client. `GET` requests that fail without
/// receiving any response are retried automatically, up to
/// [`with_max_automatic_retries`](PaysafeClientBuilder::with_max_automatic_retries) times.
#[derive(Debug, Clone)]
pub struct PaysafeClient {
    /// Service status APIs client.
    pub monitor: MonitorApi,
    /// Payment methods APIs client.
    pub payment_methods: PaymentMethodsApi,
    /// Payment handles APIs client.
    pub payment_handles: PaymentHandlesApi,
    /// Payments APIs client.
    pub payments: PaymentsApi,
    /// Settlements APIs client.
    pub settlements: SettlementsApi,
    /// Refunds APIs client.
    pub refunds: RefundsApi,
    /// Void authorizations APIs client.
    pub void_authorizations: VoidAuthorizationsApi,
    /// Verifications APIs client.
    pub verifications: VerificationsApi,
    /// Standalone credits APIs client.
    pub standalone_credits: StandaloneCreditsApi,
    /// Original credits APIs client.
    pub original_credits: OriginalCreditsApi,
    /// Customers APIs client.
    pub customers: CustomersApi,
    /// Customer addresses APIs client.
    pub customer_addresses: CustomerAddressesApi,
    /// Customer payment handles APIs client.
    pub customer_payment_handles: CustomerPaymentHandlesApi,
    /// Single-use customer tokens APIs client.
    pub customer_single_use_tokens: CustomerSingleUseTokensApi,
}

impl PaysafeClient {
    /// Builds a new [`PaysafeClient`](crate::client::PaysafeClient) for the given environment
    /// with the default configuration.
    pub fn new(api_key: impl Into<ApiKey>, environment: Environment) -> Result<Self, Error> {
        PaysafeClientBuilder::new(api_key)
            .with_environment(environment)
            .build()
    }

    /// Returns a new builder to configure a new [`PaysafeClient`](crate::client::PaysafeClient).
    pub fn builder(api_key: impl Into<ApiKey>) -> PaysafeClientBuilder {
        PaysafeClientBuilder::new(api_key)
    }
}

/// Builder for a [`PaysafeClient`](crate::client::PaysafeClient).
#[derive(Debug)]
pub struct PaysafeClientBuilder {
    api_key: ApiKey,
    environment: Environment,
    base_url: Option<Url>,
    connect_timeout: Duration,
    response_timeout: Duration,
    max_automatic_retries: u32,
    proxy: Option<Proxy>,
    root_certificates: Vec<Certificate>,
}

impl PaysafeClientBuilder {
    /// Creates a new builder to configure a [`PaysafeClient`](crate::client::PaysafeClient).
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: Environment::default(),
            base_url: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
            max_automatic_retries: DEFAULT_MAX_AUTOMATIC_RETRIES,
            proxy: None,
            root_certificates: vec![],
        }
    }

    /// Consumes the builder and builds a new [`PaysafeClient`](crate::client::PaysafeClient).
    ///
    /// Fails with [`Error::InvalidConfiguration`] if any setting is out of range.
    pub fn build(self) -> Result<PaysafeClient, Error> {
        self.api_key.validate()?;
        validate_max_automatic_retries(Some(self.max_automatic_retries))?;
        validate_timeout(
            Some(self.connect_timeout),
            MESSAGE_CONNECT_TIMEOUT_NOT_POSITIVE,
        )?;
        validate_timeout(
            Some(self.response_timeout),
            MESSAGE_RESPONSE_TIMEOUT_NOT_POSITIVE,
        )?;

        let environment = self.environment;
        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| environment.url());
        let config = self.into_config();

        let inner = Arc::new(PaysafeClientInner {
            client: build_client_with_middleware(
                &config,
                config.connect_timeout,
                config.max_automatic_retries,
            )?,
            config,
            environment,
            base_url,
        });

        tracing::debug!(
            environment = ?inner.environment,
            base_url = %inner.base_url,
            "Paysafe client initialized"
        );

        Ok(PaysafeClient {
            monitor: MonitorApi::new(inner.clone()),
            payment_methods: PaymentMethodsApi::new(inner.clone()),
            payment_handles: PaymentHandlesApi::new(inner.clone()),
            payments: PaymentsApi::new(inner.clone()),
            settlements: SettlementsApi::new(inner.clone()),
            refunds: RefundsApi::new(inner.clone()),
            void_authorizations: VoidAuthorizationsApi::new(inner.clone()),
            verifications: VerificationsApi::new(inner.clone()),
            standalone_credits: StandaloneCreditsApi::new(inner.clone()),
            original_credits: OriginalCreditsApi::new(inner.clone()),
            customers: CustomersApi::new(inner.clone()),
            customer_addresses: CustomerAddressesApi::new(inner.clone()),
            customer_payment_handles: CustomerPaymentHandlesApi::new(inner.clone()),
            customer_single_use_tokens: CustomerSingleUseTokensApi::new(inner),
        })
    }

    pub(crate) fn into_config(self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key,
            connect_timeout: self.connect_timeout,
            response_timeout: self.response_timeout,
            max_automatic_retries: self.max_automatic_retries,
            proxy: self.proxy,
            root_certificates: self.root_certificates,
        }
    }

    /// Sets the environment to connect to.
    ///
    /// Defaults to: [`Environment::Test`]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the base URL of the environment, e.g. to point to a mock server.
    ///
    /// The environment still decides whether the `Simulator` header is sent.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the maximum time allowed to establish a connection.
    ///
    /// Defaults to 30 seconds.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Sets the maximum time allowed for a request to complete, from the moment it is sent
    /// until the response body is fully read.
    ///
    /// Defaults to 60 seconds.
    pub fn with_response_timeout(mut self, response_timeout: Duration) -> Self {
        self.response_timeout = response_timeout;
        self
    }

    /// Sets how many times a `GET` request that got no response is retried.
    ///
    /// Defaults to 2, at most 5. Use 0 to disable retries.
    pub fn with_max_automatic_retries(mut self, max_automatic_retries: u32) -> Self {
        self.max_automatic_retries = max_automatic_retries;
        self
    }

    /// Routes all requests through the given proxy.
    ///
    /// When not set, the `HTTP_PROXY`/`HTTPS_PROXY` environment variables are honoured.
    pub fn with_proxy(mut self, proxy: Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Adds a custom root certificate to trust when connecting over TLS.
    pub fn add_root_certificate(mut self, certificate: Certificate) -> Self {
        self.root_certificates.push(certificate);
        self
    }
}

/// Validated configuration kept around to build dedicated HTTP clients for calls
/// overriding the connect timeout or the number of retries.
pub(crate) struct ClientConfig {
    pub(crate) api_key: ApiKey,
    pub(crate) connect_timeout: Duration,
    pub(crate) response_timeout: Duration,
    pub(crate) max_automatic_retries: u32,
    proxy: Option<Proxy>,
    root_certificates: Vec<Certificate>,
}

pub(crate) fn build_client_with_middleware(
    config: &ClientConfig,
    connect_timeout: Duration,
    max_automatic_retries: u32,
) -> Result<ClientWithMiddleware, Error> {
    let mut http_client = reqwest::Client::builder().connect_timeout(connect_timeout);
    if let Some(proxy) = &config.proxy {
        http_client = http_client.proxy(proxy.clone());
    }
    for certificate in &config.root_certificates {
        http_client = http_client.add_root_certificate(certificate.clone());
    }

    let mut builder = reqwest_middleware::ClientBuilder::new(http_client.build()?)
        .with(TracingMiddleware::default())
        .with(ErrorHandlingMiddleware);

    if max_automatic_retries > 0 {
        builder = builder.with(RetryConnectionFailureMiddleware::new(DynRetryPolicy(
            Arc::new(ConnectionRetryPolicy::new(max_automatic_retries)),
        )));
    }

    Ok(builder
        .with(AuthenticationMiddleware {
            api_key: config.api_key.clone(),
        })
        .with(InjectHeadersMiddleware::new())
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{MESSAGE_BLANK_API_KEY, MESSAGE_MAX_AUTOMATIC_RETRIES_LIMIT};
    use test_case::test_case;

    #[test]
    fn defaults_to_test_environment() {
        let builder = PaysafeClient::builder("user:password");

        assert_eq!(builder.environment, Environment::Test);
        assert_eq!(builder.connect_timeout, Duration::from_secs(30));
        assert_eq!(builder.response_timeout, Duration::from_secs(60));
        assert_eq!(builder.max_automatic_retries, 2);
    }

    #[test_case(Environment::Live, "https://api.paysafe.com/")]
    #[test_case(Environment::Test, "https://api.test.paysafe.com/")]
    fn environment_urls(environment: Environment, expected: &str) {
        assert_eq!(environment.url().as_str(), expected);
    }

    #[test]
    fn base_url_overrides_environment() {
        let client = PaysafeClient::builder("user:password")
            .with_environment(Environment::Live)
            .with_base_url(Url::parse("http://localhost:8080").unwrap())
            .build()
            .unwrap();

        assert_eq!(client.monitor.inner.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(client.monitor.inner.environment, Environment::Live);
    }

    #[test]
    fn debug_does_not_leak_api_key() {
        let builder = PaysafeClient::builder("user:topsecret");
        assert!(!format!("{:?}", builder).contains("topsecret"));

        let client = builder.build().unwrap();
        assert!(!format!("{:?}", client).contains("topsecret"));
    }

    #[test_case(PaysafeClient::builder("  "), MESSAGE_BLANK_API_KEY ; "blank api key")]
    #[test_case(
        PaysafeClient::builder("user:password").with_max_automatic_retries(6),
        MESSAGE_MAX_AUTOMATIC_RETRIES_LIMIT ;
        "too many retries"
    )]
    #[test_case(
        PaysafeClient::builder("user:password").with_connect_timeout(Duration::ZERO),
        MESSAGE_CONNECT_TIMEOUT_NOT_POSITIVE ;
        "zero connect timeout"
    )]
    #[test_case(
        PaysafeClient::builder("user:password").with_response_timeout(Duration::ZERO),
        MESSAGE_RESPONSE_TIMEOUT_NOT_POSITIVE ;
        "zero response timeout"
    )]
    fn invalid_configuration_is_rejected(builder: PaysafeClientBuilder, message: &str) {
        match builder.build() {
            Err(Error::InvalidConfiguration(m)) => assert_eq!(m, message),
            Err(e) => panic!("Unexpected error: {}", e),
            Ok(_) => panic!("Configuration accepted"),
        }
    }

    #[test]
    fn retry_limit_is_inclusive() {
        assert!(PaysafeClient::builder("user:password")
            .with_max_automatic_retries(5)
            .build()
            .is_ok());
        assert!(PaysafeClient::builder("user:password")
            .with_max_automatic_retries(0)
            .build()
            .is_ok());
    }
}
