use crate::{
    apis::{
        common::{GatewayResponse, Meta, Splitpay, TransactionRequestStatus},
        travel::{AirlineTravelDetails, CarRentalDetails, CruiselineTravelDetails, LodgingDetails},
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SettlementPaymentType {
    Card,
    Paysafecash,
    Paysafecard,
    Paypal,
    Interac,
}

/// Request to settle, fully or partially, an authorized payment.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRequest {
    pub merchant_ref_num: Option<String>,
    /// Amount to settle, the whole authorized amount when `None`.
    pub amount: Option<u64>,
    pub dup_check: Option<bool>,
    pub splitpay: Option<Vec<Splitpay>>,
    pub airline_travel_details: Option<AirlineTravelDetails>,
    pub cruiseline_travel_details: Option<CruiselineTravelDetails>,
    pub lodging_details: Option<LodgingDetails>,
    pub car_rental_details: Option<CarRentalDetails>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub id: Option<String>,
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub dup_check: Option<bool>,
    pub splitpay: Option<Vec<Splitpay>>,
    pub airline_travel_details: Option<AirlineTravelDetails>,
    pub cruiseline_travel_details: Option<CruiselineTravelDetails>,
    pub lodging_details: Option<LodgingDetails>,
    pub car_rental_details: Option<CarRentalDetails>,
    pub payment_type: Option<SettlementPaymentType>,
    pub available_to_refund: Option<u64>,
    pub child_account_num: Option<String>,
    pub txn_time: Option<String>,
    pub status: Option<TransactionRequestStatus>,
    pub risk_reason_code: Option<Vec<u32>>,
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
pub struct SettlementList {
    pub settlements: Option<Vec<Settlement>>,
    pub meta: Option<Meta>,
}
