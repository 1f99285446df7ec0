mod routes;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use paysafe_payments::apis::{
    customers::Customer, payment_handles::PaymentHandle, payments::Payment, refunds::Refund,
    settlements::Settlement,
};
use serde_json::json;
use std::{
    collections::HashMap,
    str::FromStr,
    sync::{Arc, RwLock},
};
use url::Url;
use wiremock::{
    http::HeaderName,
    matchers::{method, path, path_regex},
    Match, Mock, MockServer, Request, ResponseTemplate,
};

#[derive(Clone, Default)]
struct MockServerStorageInner {
    payment_handles: HashMap<String, PaymentHandle>,
    payments: HashMap<String, Payment>,
    settlements: HashMap<String, Settlement>,
    refunds: HashMap<String, Refund>,
    customers: HashMap<String, Customer>,
}

/// In-memory storage for resources created on the mock server.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Matches requests carrying the expected credentials and SDK headers.
struct ValidRequest {
    authorization: String,
}

impl Match for ValidRequest {
    fn matches(&self, request: &Request) -> bool {
        let header = |name: &str| {
            request
                .headers
                .get(&HeaderName::from_str(name).unwrap())
                .map(|v| v.last().as_str())
        };

        header("authorization") == Some(self.authorization.as_str())
            && header("x-transaction-source") == Some("RustSDK")
    }
}

/// Simple stateful mock of the Paysafe Payments API used in local integration tests.
pub struct PaysafeMockServer {
    server: MockServer,
    storage: MockServerStorage,
}

impl PaysafeMockServer {
    pub async fn start(api_key: &str) -> Self {
        let server = MockServer::start().await;
        let storage = MockServerStorage::default();
        let authorization = format!("Basic {}", STANDARD.encode(api_key));

        let valid = || ValidRequest {
            authorization: authorization.clone(),
        };

        let mocks = [
            Mock::given(method("GET"))
                .and(path("/paymenthub/v1/monitor"))
                .and(valid())
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "READY"}))),
            Mock::given(method("POST"))
                .and(path("/paymenthub/v1/paymenthandles"))
                .and(valid())
                .respond_with(routes::CreatePaymentHandle(storage.clone())),
            Mock::given(method("GET"))
                .and(path_regex(r"^/paymenthub/v1/paymenthandles/[^/]+$"))
                .and(valid())
                .respond_with(routes::GetPaymentHandle(storage.clone())),
            Mock::given(method("POST"))
                .and(path("/paymenthub/v1/payments"))
                .and(valid())
                .respond_with(routes::ProcessPayment(storage.clone())),
            Mock::given(method("GET"))
                .and(path("/paymenthub/v1/payments"))
                .and(valid())
                .respond_with(routes::ListPayments(storage.clone())),
            Mock::given(method("GET"))
                .and(path_regex(r"^/paymenthub/v1/payments/[^/]+$"))
                .and(valid())
                .respond_with(routes::GetPayment(storage.clone())),
            Mock::given(method("POST"))
                .and(path_regex(r"^/paymenthub/v1/payments/[^/]+/settlements$"))
                .and(valid())
                .respond_with(routes::ProcessSettlement(storage.clone())),
            Mock::given(method("POST"))
                .and(path_regex(r"^/paymenthub/v1/settlements/[^/]+/refunds$"))
                .and(valid())
                .respond_with(routes::ProcessRefund(storage.clone())),
            Mock::given(method("POST"))
                .and(path("/paymenthub/v1/customers"))
                .and(valid())
                .respond_with(routes::CreateCustomer(storage.clone())),
            Mock::given(method("GET"))
                .and(path_regex(r"^/paymenthub/v1/customers/[^/]+$"))
                .and(valid())
                .respond_with(routes::GetCustomer(storage.clone())),
            Mock::given(method("DELETE"))
                .and(path_regex(r"^/paymenthub/v1/customers/[^/]+$"))
                .and(valid())
                .respond_with(routes::DeleteCustomer(storage.clone())),
            Mock::given(method("POST"))
                .and(path_regex(r"^/paymenthub/v1/customers/[^/]+/paymenthandles$"))
                .and(valid())
                .respond_with(routes::CreateCustomerPaymentHandle(storage.clone())),
        ];
        for mock in mocks {
            mock.mount(&server).await;
        }

        // Anything else is answered as Paysafe does for bad credentials
        Mock::given(path_regex(".*"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "code": "5279",
                    "message": "Invalid credentials",
                    "details": ["The authentication credentials are invalid."]
                }
            })))
            .mount(&server)
            .await;

        Self { server, storage }
    }

    pub fn url(&self) -> Url {
        Url::parse(&self.server.uri()).unwrap()
    }

    /// Number of requests received for the given path, whatever their outcome.
    pub async fn received_requests_to(&self, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == request_path)
            .count()
    }

    pub fn stored_payment(&self, id: &str) -> Option<Payment> {
        self.storage.read().unwrap().payments.get(id).cloned()
    }
}
