use crate::common::test_context::TestContext;
use paysafe_payments::apis::{
    cards::{Card, CardExpiry},
    common::{CurrencyCode, PaymentType},
    payment_handles::{PaymentHandle, PaymentHandleRequest, TransactionType},
    payments::{Payment, PaymentRequest},
};
use uuid::Uuid;

/// Card approved by the TEST environment simulator.
pub static APPROVED_CARD_NUM: &str = "4000000000001000";

pub fn card_payment_handle_request(amount: u64) -> PaymentHandleRequest {
    PaymentHandleRequest {
        merchant_ref_num: Some(Uuid::new_v4().to_string()),
        transaction_type: Some(TransactionType::Payment),
        payment_type: Some(PaymentType::Card),
        amount: Some(amount),
        currency_code: Some(CurrencyCode::Usd),
        card: Some(Card {
            card_num: Some(APPROVED_CARD_NUM.into()),
            card_expiry: Some(CardExpiry {
                month: Some(10),
                year: Some(2030),
            }),
            cvv: Some("111".into()),
            holder_name: Some("John Doe".into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub async fn create_card_payment_handle(
    ctx: &TestContext,
    amount: u64,
) -> anyhow::Result<PaymentHandle> {
    let handle = ctx
        .client
        .payment_handles
        .create(&card_payment_handle_request(amount))
        .await?;
    Ok(handle)
}

pub async fn process_card_payment(
    ctx: &TestContext,
    amount: u64,
    settle_with_auth: bool,
) -> anyhow::Result<Payment> {
    let handle = create_card_payment_handle(ctx, amount).await?;

    let payment = ctx
        .client
        .payments
        .process(&PaymentRequest {
            merchant_ref_num: handle.merchant_ref_num.clone(),
            amount: Some(amount),
            currency_code: Some(CurrencyCode::Usd),
            payment_handle_token: handle.payment_handle_token,
            settle_with_auth: Some(settle_with_auth),
            ..Default::default()
        })
        .await?;
    Ok(payment)
}
