use crate::{
    apis::common::{
        CurrencyCode, GatewayResponse, Meta, PaymentType, Splitpay, TransactionRequestStatus,
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub dup_check: Option<bool>,
    pub splitpay: Option<Vec<Splitpay>>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: Option<String>,
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub dup_check: Option<bool>,
    pub splitpay: Option<Vec<Splitpay>>,
    pub payment_type: Option<PaymentType>,
    pub currency_code: Option<CurrencyCode>,
    pub txn_time: Option<String>,
    pub status: Option<TransactionRequestStatus>,
    pub gateway_reconciliation_id: Option<String>,
    pub updated_time: Option<String>,
    pub status_time: Option<String>,
    pub live_mode: Option<bool>,
    pub gateway_response: Option<GatewayResponse>,
    pub source: Option<String>,
    pub child_account_num: Option<String>,
    pub risk_reason_code: Option<Vec<u32>>,
    pub error: Option<PaysafeError>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefundList {
    pub refunds: Option<Vec<Refund>>,
    pub meta: Option<Meta>,
}
