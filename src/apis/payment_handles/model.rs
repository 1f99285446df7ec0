use crate::{
    apis::{
        alternative_payments::{
            Ach, Bacs, Eft, Interac, Mazooma, Neteller, PayByBank, PaymentDetails, Paypal,
            Paysafecard, Paysafecash, RapidTransfer, SafetyPayCash, Sepa, Sightline, Skrill,
            Skrill1Tap, Venmo, Vippreferred,
        },
        cards::{
            Authentication, BrowserDetails, Card, CardAuthentication,
            CardWithOptionalNetworkTokenOrApplePay, ThreeDs, TransactionIntent,
        },
        common::{
            BillingDetails, CurrencyCode, DeviceDetails, GatewayResponse, Link, Mandate,
            MerchantDescriptor, Meta, PaymentType, Profile, ReturnLink, ShippingDetails,
        },
        wallets::{ApplePay, GooglePay},
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Payment,
    StandaloneCredit,
    OriginalCredit,
    Verification,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentHandleStatus {
    Initiated,
    Payable,
    Processing,
    Failed,
    Expired,
    Completed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentHandleUsage {
    SingleUse,
    MultiUse,
}

/// Next step required from the merchant before the handle becomes payable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    None,
    Redirect,
    Lookup,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionMode {
    Synchronous,
    Asynchronous,
}

/// Request to tokenize a payment instrument.
///
/// Exactly one payment method payload is expected, matching `payment_type`.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandleRequest {
    pub merchant_ref_num: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub account_id: Option<String>,
    pub payment_type: Option<PaymentType>,
    pub amount: Option<u64>,
    pub currency_code: Option<CurrencyCode>,
    pub profile: Option<Profile>,
    pub billing_details: Option<BillingDetails>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub return_links: Option<Vec<ReturnLink>>,
    pub customer_ip: Option<String>,
    pub shipping_details: Option<ShippingDetails>,
    pub card: Option<Card>,
    pub three_ds: Option<ThreeDs>,
    pub authentication: Option<CardAuthentication>,
    pub payment_handle_token_from: Option<String>,
    pub transaction_intent: Option<TransactionIntent>,
    pub apple_pay: Option<ApplePay>,
    pub google_pay: Option<GooglePay>,
    pub skrill: Option<Skrill>,
    pub gateway_response: Option<GatewayResponse>,
    pub neteller: Option<Neteller>,
    pub paysafecash: Option<Paysafecash>,
    pub paysafecard: Option<Paysafecard>,
    #[serde(rename = "payPal")]
    pub paypal: Option<Paypal>,
    pub venmo: Option<Venmo>,
    pub vippreferred: Option<Vippreferred>,
    pub mazooma: Option<Mazooma>,
    pub sightline: Option<Sightline>,
    pub pay_by_bank: Option<PayByBank>,
    #[serde(rename = "interacETransfer")]
    pub interac_etransfer: Option<Interac>,
    pub browser_details: Option<BrowserDetails>,
    pub device_details: Option<DeviceDetails>,
    pub rapid_transfer: Option<RapidTransfer>,
    #[serde(rename = "skrill1Tap")]
    pub skrill_1tap: Option<Skrill1Tap>,
    pub ach: Option<Ach>,
    pub eft: Option<Eft>,
    pub dup_check: Option<bool>,
    pub bacs: Option<Bacs>,
    pub mandates: Option<Vec<Mandate>>,
    pub sepa: Option<Sepa>,
    pub safety_pay_cash: Option<SafetyPayCash>,
    pub payment_expiry_in_minutes: Option<u32>,
    pub payment_details: Option<PaymentDetails>,
    pub payment_expiry_minutes: Option<u32>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

/// Tokenized payment instrument.
///
/// `payment_handle_token` is what [`PaymentRequest`](crate::apis::payments::PaymentRequest)
/// and the credit requests expect. When `action` is [`Action::Redirect`], the customer must
/// first complete the flow behind the `redirect_payment` link.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandle {
    pub id: Option<String>,
    pub payment_handle_token: Option<String>,
    pub txn_time: Option<String>,
    pub status: Option<PaymentHandleStatus>,
    pub live_mode: Option<bool>,
    pub usage: Option<PaymentHandleUsage>,
    pub action: Option<Action>,
    pub execution_mode: Option<ExecutionMode>,
    pub time_to_live_seconds: Option<u32>,
    pub gateway_reconciliation_id: Option<String>,
    pub updated_time: Option<String>,
    pub status_time: Option<String>,
    pub links: Option<Vec<Link>>,
    pub merchant_ref_num: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub account_id: Option<String>,
    pub payment_type: Option<PaymentType>,
    pub amount: Option<u64>,
    pub currency_code: Option<CurrencyCode>,
    pub profile: Option<Profile>,
    pub billing_details: Option<BillingDetails>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub return_links: Option<Vec<ReturnLink>>,
    pub customer_ip: Option<String>,
    pub shipping_details: Option<ShippingDetails>,
    pub card: Option<CardWithOptionalNetworkTokenOrApplePay>,
    pub skip3ds: Option<bool>,
    pub three_ds: Option<ThreeDs>,
    pub authentication: Option<Authentication>,
    pub payment_handle_token_from: Option<String>,
    pub transaction_intent: Option<TransactionIntent>,
    pub gateway_response: Option<GatewayResponse>,
    pub apple_pay: Option<ApplePay>,
    pub google_pay: Option<GooglePay>,
    pub skrill: Option<Skrill>,
    pub neteller: Option<Neteller>,
    pub paysafecash: Option<Paysafecash>,
    pub paysafecard: Option<Paysafecard>,
    #[serde(rename = "payPal")]
    pub paypal: Option<Paypal>,
    pub venmo: Option<Venmo>,
    pub vippreferred: Option<Vippreferred>,
    pub mazooma: Option<Mazooma>,
    pub sightline: Option<Sightline>,
    pub pay_by_bank: Option<PayByBank>,
    #[serde(rename = "interacETransfer")]
    pub interac_etransfer: Option<Interac>,
    pub browser_details: Option<BrowserDetails>,
    pub device_details: Option<DeviceDetails>,
    pub rapid_transfer: Option<RapidTransfer>,
    #[serde(rename = "skrill1Tap")]
    pub skrill_1tap: Option<Skrill1Tap>,
    pub ach: Option<Ach>,
    pub eft: Option<Eft>,
    pub dup_check: Option<bool>,
    pub bacs: Option<Bacs>,
    pub mandates: Option<Vec<Mandate>>,
    pub sepa: Option<Sepa>,
    pub safety_pay_cash: Option<SafetyPayCash>,
    pub payment_expiry_in_minutes: Option<u32>,
    pub payment_details: Option<PaymentDetails>,
    pub payment_expiry_minutes: Option<u32>,
    pub error: Option<PaysafeError>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandleList {
    pub payment_handles: Option<Vec<PaymentHandle>>,
    pub meta: Option<Meta>,
}
