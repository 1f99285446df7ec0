use crate::common::test_context::TestContext;
use paysafe_payments::{apis::monitor::ServiceStatus, error::ApiErrorKind};

#[tokio::test]
async fn service_is_accessible() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .monitor
        .verify_that_service_is_accessible()
        .await
        .unwrap();

    assert_eq!(res.status, Some(ServiceStatus::Ready));
}

#[tokio::test]
async fn invalid_credentials_are_rejected() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client_with_api_key("unknown-user:B-qa2-0-wrong")
        .monitor
        .verify_that_service_is_accessible()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::InvalidCredentials));
    assert_eq!(err.code(), Some(401));
    assert_eq!(err.error().unwrap().code.as_deref(), Some("5279"));
}
