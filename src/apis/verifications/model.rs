use crate::{
    apis::{
        cards::{Authentication, CardWithOptionalNetworkTokenOrApplePay},
        common::{
            BillingDetails, CurrencyCode, GatewayResponse, MerchantDescriptor, Meta,
            PaymentFacilitator, Profile, StoredCredential,
        },
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Completed,
    Failed,
    Received,
    Error,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationPaymentType {
    Card,
    InteracEtransfer,
    Mazooma,
    Sightline,
    Vippreferred,
    Skrill,
    Neteller,
}

/// Request to verify the payment instrument behind a payment handle.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub merchant_ref_num: Option<String>,
    pub payment_handle_token: Option<String>,
    pub currency_code: Option<CurrencyCode>,
    pub customer_ip: Option<String>,
    pub dup_check: Option<bool>,
    pub description: Option<String>,
    pub stored_credential: Option<StoredCredential>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub payment_facilitator: Option<PaymentFacilitator>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub id: Option<String>,
    pub merchant_ref_num: Option<String>,
    pub payment_handle_token: Option<String>,
    pub payment_type: Option<VerificationPaymentType>,
    pub currency_code: Option<CurrencyCode>,
    pub customer_ip: Option<String>,
    pub dup_check: Option<bool>,
    pub description: Option<String>,
    pub txn_time: Option<String>,
    pub status: Option<VerificationStatus>,
    pub card: Option<CardWithOptionalNetworkTokenOrApplePay>,
    pub authentication: Option<Authentication>,
    pub billing_details: Option<BillingDetails>,
    pub profile: Option<Profile>,
    pub gateway_response: Option<GatewayResponse>,
    pub gateway_reconciliation_id: Option<String>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub payment_facilitator: Option<PaymentFacilitator>,
    pub live_mode: Option<bool>,
    pub updated_time: Option<String>,
    pub status_time: Option<String>,
    pub error: Option<PaysafeError>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerificationList {
    pub verifications: Option<Vec<Verification>>,
    pub meta: Option<Meta>,
}
