use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{create_card_payment_handle, process_card_payment},
};
use paysafe_payments::{
    apis::{
        common::{CurrencyCode, PaymentType, TransactionRequestStatus},
        payment_handles::{Action, PaymentHandleStatus, PaymentHandleUsage},
        payments::PaymentStatus,
        refunds::RefundRequest,
        settlements::SettlementRequest,
        ListParametersBuilder,
    },
    error::ApiErrorKind,
};
use uuid::Uuid;

#[tokio::test]
async fn create_card_payment_handle_and_get_it_back() {
    let ctx = TestContext::start().await;

    let handle = create_card_payment_handle(&ctx, 1500).await.unwrap();
    assert_eq!(handle.status, Some(PaymentHandleStatus::Payable));
    assert_eq!(handle.usage, Some(PaymentHandleUsage::SingleUse));
    assert_eq!(handle.action, Some(Action::None));
    assert_eq!(handle.payment_type, Some(PaymentType::Card));
    assert_eq!(
        handle.card.as_ref().unwrap().last_digits.as_deref(),
        Some("1000")
    );

    let fetched = ctx
        .client
        .payment_handles
        .get_by_id(handle.id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(fetched.id, handle.id);
    assert_eq!(fetched.payment_handle_token, handle.payment_handle_token);
}

#[tokio::test]
async fn card_payment_settled_with_auth() {
    let ctx = TestContext::start().await;

    let payment = process_card_payment(&ctx, 1500, true).await.unwrap();
    assert_eq!(payment.status, Some(PaymentStatus::Completed));
    assert_eq!(payment.amount, Some(1500));
    assert_eq!(payment.currency_code, Some(CurrencyCode::Usd));
    assert_eq!(payment.settlements.as_ref().map(Vec::len), Some(1));

    let id = payment.id.as_deref().unwrap();
    let fetched = ctx.client.payments.get_by_id(id).await.unwrap();
    assert_eq!(fetched.id, payment.id);
    assert_eq!(fetched.merchant_ref_num, payment.merchant_ref_num);

    let params = ListParametersBuilder::default()
        .merchant_ref_num(payment.merchant_ref_num.clone().unwrap())
        .limit(5u32)
        .build()
        .unwrap();
    let list = ctx
        .client
        .payments
        .get_by_merchant_ref_num(&params)
        .await
        .unwrap();
    assert!(list
        .payments
        .unwrap_or_default()
        .iter()
        .any(|p| p.id == payment.id));
}

#[tokio::test]
async fn authorize_then_settle_then_refund() {
    let ctx = TestContext::start().await;

    let payment = process_card_payment(&ctx, 2000, false).await.unwrap();
    assert_eq!(payment.status, Some(PaymentStatus::Completed));
    assert_eq!(payment.available_to_settle, Some(2000));

    let settlement = ctx
        .client
        .settlements
        .process(
            payment.id.as_deref().unwrap(),
            &SettlementRequest {
                merchant_ref_num: Some(Uuid::new_v4().to_string()),
                amount: Some(2000),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(settlement.amount, Some(2000));
    assert!(settlement.id.is_some());

    let refund = ctx
        .client
        .refunds
        .process(
            settlement.id.as_deref().unwrap(),
            &RefundRequest {
                merchant_ref_num: Some(Uuid::new_v4().to_string()),
                amount: Some(500),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(refund.amount, Some(500));
    assert_ne!(refund.status, Some(TransactionRequestStatus::Failed));
}

#[tokio::test]
async fn get_unknown_payment() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .payments
        .get_by_id(&Uuid::new_v4().to_string())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::Unsuccessful));
    assert_eq!(err.code(), Some(404));
    let error = err.error().unwrap();
    assert_eq!(error.code.as_deref(), Some("5269"));
    assert_eq!(error.message.as_deref(), Some("Entity not found"));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn single_use_handle_pays_once() {
    let ctx = TestContext::start().await;

    let payment = process_card_payment(&ctx, 700, true).await.unwrap();
    let stored = ctx
        .mock_server()
        .stored_payment(payment.id.as_deref().unwrap())
        .unwrap();
    assert_eq!(stored, payment);

    let err = ctx
        .client
        .payments
        .process(&paysafe_payments::apis::payments::PaymentRequest {
            amount: Some(700),
            currency_code: Some(CurrencyCode::Usd),
            payment_handle_token: payment.payment_handle_token,
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::InvalidRequest));
    assert_eq!(err.code(), Some(400));
}
