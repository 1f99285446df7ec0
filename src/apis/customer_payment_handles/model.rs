use crate::{
    apis::{
        alternative_payments::{Ach, Bacs, Eft, Sepa},
        cards::{
            Authentication, CardBillingDetailsRequest, CardWithOptionalNetworkTokenOrApplePay,
            ThreeDs, TransactionIntent, UpdateCustomerRequestCard,
        },
        common::{
            BillingDetails, CurrencyCode, GatewayResponse, Mandate, MerchantDescriptor,
            PaymentType, Profile, ShippingDetails,
        },
        payment_handles::{Action, PaymentHandleStatus, PaymentHandleUsage},
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPaymentHandleRequest {
    pub merchant_ref_num: Option<String>,
    pub customer_ip: Option<String>,
    pub billing_details: Option<CardBillingDetailsRequest>,
    pub billing_details_id: Option<String>,
    pub card: Option<UpdateCustomerRequestCard>,
    pub amount: Option<u64>,
    pub currency_code: Option<CurrencyCode>,
    pub payment_handle_token_from: Option<String>,
    pub payment_type: Option<PaymentType>,
    pub dup_check: Option<bool>,
    pub eft: Option<Eft>,
    pub ach: Option<Ach>,
    pub bacs: Option<Bacs>,
    pub sepa: Option<Sepa>,
    pub mandates: Option<Vec<Mandate>>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

/// Payment handle saved on a customer profile, reusable for later payments.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPaymentHandle {
    pub id: Option<String>,
    pub status: Option<PaymentHandleStatus>,
    pub usage: Option<PaymentHandleUsage>,
    pub action: Option<Action>,
    pub currency_code: Option<CurrencyCode>,
    pub payment_handle_token: Option<String>,
    pub customer_id: Option<String>,
    pub merchant_ref_num: Option<String>,
    pub payment_type: Option<PaymentType>,
    pub amount: Option<u64>,
    pub customer_ip: Option<String>,
    pub billing_details: Option<BillingDetails>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub billing_details_id: Option<String>,
    pub payment_handle_token_from: Option<String>,
    pub card: Option<CardWithOptionalNetworkTokenOrApplePay>,
    pub profile: Option<Profile>,
    pub three_ds: Option<ThreeDs>,
    pub authentication: Option<Authentication>,
    pub transaction_intent: Option<TransactionIntent>,
    pub gateway_response: Option<GatewayResponse>,
    pub shipping_details: Option<ShippingDetails>,
    pub dup_check: Option<bool>,
    pub eft: Option<Eft>,
    pub ach: Option<Ach>,
    pub bacs: Option<Bacs>,
    pub sepa: Option<Sepa>,
    pub mandates: Option<Vec<Mandate>>,
    pub error: Option<PaysafeError>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}
