use crate::common::test_context::TestContext;
use paysafe_payments::{
    apis::{
        cards::{CardExpiry, UpdateCustomerRequestCard},
        common::{CurrencyCode, Locale, PaymentType},
        customer_payment_handles::CustomerPaymentHandleRequest,
        customers::{Customer, CustomerField, CustomerRequest, CustomerStatus},
        payment_handles::{Action, PaymentHandleUsage},
    },
    error::ApiErrorKind,
};
use uuid::Uuid;

async fn create_customer(ctx: &TestContext) -> Customer {
    ctx.client
        .customers
        .create(&CustomerRequest {
            merchant_customer_id: Some(Uuid::new_v4().to_string()),
            locale: Some(Locale::EnUs),
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            email: Some("john.doe@example.com".into()),
            ..Default::default()
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn save_card_on_customer_profile() {
    let ctx = TestContext::start().await;

    let customer = create_customer(&ctx).await;
    assert_eq!(customer.status, Some(CustomerStatus::Active));
    let customer_id = customer.id.as_deref().unwrap();

    let handle = ctx
        .client
        .customer_payment_handles
        .create(
            customer_id,
            &CustomerPaymentHandleRequest {
                merchant_ref_num: Some(Uuid::new_v4().to_string()),
                payment_type: Some(PaymentType::Card),
                currency_code: Some(CurrencyCode::Usd),
                amount: Some(900),
                card: Some(UpdateCustomerRequestCard {
                    card_num: Some("4037111111000000".into()),
                    card_expiry: Some(CardExpiry {
                        month: Some(10),
                        year: Some(2025),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(handle.usage, Some(PaymentHandleUsage::MultiUse));
    assert_eq!(handle.action, Some(Action::None));
    assert_eq!(
        handle.card.as_ref().unwrap().last_digits.as_deref(),
        Some("0000")
    );

    // Payment handles are only embedded when requested
    let bare = ctx
        .client
        .customers
        .get_by_id(customer_id, &[])
        .await
        .unwrap();
    assert_eq!(bare.payment_handles, None);

    let full = ctx
        .client
        .customers
        .get_by_id(customer_id, &[CustomerField::PaymentHandles])
        .await
        .unwrap();
    let handles = full.payment_handles.unwrap();
    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].id, handle.id);
}

#[tokio::test]
async fn deleted_customer_is_not_found() {
    let ctx = TestContext::start().await;

    let customer = create_customer(&ctx).await;
    let customer_id = customer.id.as_deref().unwrap();

    ctx.client.customers.delete(customer_id).await.unwrap();

    let err = ctx
        .client
        .customers
        .get_by_id(customer_id, &[])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::Unsuccessful));
    assert_eq!(err.code(), Some(404));
    assert_eq!(err.error().unwrap().code.as_deref(), Some("5269"));
}
