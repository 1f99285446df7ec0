use crate::{
    apis::{
        alternative_payments::Sender,
        cards::{CardWithOptionalNetworkTokenOrApplePay, Recipient},
        common::{
            CurrencyCode, GatewayResponse, MerchantDescriptor, Meta, PaymentType, Profile,
            TransactionRequestStatus,
        },
        standalone_credits::TransactionIntentCredit,
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCreditRequest {
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub currency_code: Option<CurrencyCode>,
    pub payment_handle_token: Option<String>,
    pub customer_ip: Option<String>,
    pub description: Option<String>,
    pub dup_check: Option<bool>,
    pub transaction_intent: Option<TransactionIntentCredit>,
    pub sender: Option<Sender>,
    pub recipient: Option<Recipient>,
    pub profile: Option<Profile>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCredit {
    pub id: Option<String>,
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub currency_code: Option<CurrencyCode>,
    pub payment_handle_token: Option<String>,
    pub payment_type: Option<PaymentType>,
    pub customer_ip: Option<String>,
    pub description: Option<String>,
    pub dup_check: Option<bool>,
    pub transaction_intent: Option<TransactionIntentCredit>,
    pub txn_time: Option<String>,
    pub status: Option<TransactionRequestStatus>,
    pub card_scheme_transaction_id: Option<String>,
    pub card: Option<CardWithOptionalNetworkTokenOrApplePay>,
    pub sender: Option<Sender>,
    pub recipient: Option<Recipient>,
    pub profile: Option<Profile>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub gateway_response: Option<GatewayResponse>,
    pub gateway_reconciliation_id: Option<String>,
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
pub struct OriginalCreditList {
    pub original_credits: Option<Vec<OriginalCredit>>,
    pub meta: Option<Meta>,
}
