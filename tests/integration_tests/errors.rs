use crate::common::test_context::TestContext;
use paysafe_payments::{
    apis::payments::PaymentRequest, Error, PaysafeClient, RequestOptionsBuilder,
};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::net::TcpListener;
use url::Url;

/// Starts a TCP server closing every connection without answering,
/// and returns its URL along with the number of accepted connections.
async fn start_hanging_up_server() -> (Url, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();

    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(socket);
        }
    });

    (url, attempts)
}

fn client_for(url: Url) -> PaysafeClient {
    PaysafeClient::builder("merchant-user:B-qa2-0-secret")
        .with_base_url(url)
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_is_retried_on_connection_failure() {
    let (url, attempts) = start_hanging_up_server().await;

    let err = client_for(url)
        .payments
        .get_by_id("some-payment-id")
        .await
        .unwrap_err();

    // One attempt plus the two default retries
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert!(matches!(err, Error::ApiConnection { .. }));
    assert_eq!(err.code(), None);
    assert!(err.error().is_none());
    assert!(err.kind().is_none());
}

#[tokio::test]
async fn post_is_never_retried() {
    let (url, attempts) = start_hanging_up_server().await;

    let err = client_for(url)
        .payments
        .process(&PaymentRequest {
            amount: Some(100),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert!(matches!(err, Error::ApiConnection { .. }));
}

#[tokio::test]
async fn retries_can_be_disabled_per_call() {
    let (url, attempts) = start_hanging_up_server().await;
    let options = RequestOptionsBuilder::default()
        .max_automatic_retries(0u32)
        .build()
        .unwrap();

    let err = client_for(url)
        .payments
        .with_options(options)
        .get_by_id("some-payment-id")
        .await
        .unwrap_err();

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert!(matches!(err, Error::ApiConnection { .. }));
}

#[tokio::test]
async fn error_responses_are_not_retried() {
    let ctx = TestContext::start().await;
    let options = RequestOptionsBuilder::default()
        .max_automatic_retries(2u32)
        .build()
        .unwrap();

    let err = ctx
        .client
        .payments
        .with_options(options)
        .get_by_id("unknown-payment-id")
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(404));
    assert_eq!(
        ctx.mock_server()
            .received_requests_to("/paymenthub/v1/payments/unknown-payment-id")
            .await,
        1
    );
}

#[tokio::test]
async fn invalid_request_options_are_rejected_before_sending() {
    let ctx = TestContext::start().await;
    let options = RequestOptionsBuilder::default()
        .response_timeout(Duration::ZERO)
        .build()
        .unwrap();

    let err = ctx
        .client
        .monitor
        .with_options(options)
        .verify_that_service_is_accessible()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration(_)));
    assert_eq!(
        ctx.mock_server()
            .received_requests_to("/paymenthub/v1/monitor")
            .await,
        0
    );
}
