use crate::{
    apis::{
        alternative_payments::{
            Ach, Bacs, Eft, Interac, Neteller, Paypal, Sender, Sepa, Skrill, Venmo, Vippreferred,
        },
        cards::CardWithOptionalNetworkTokenOrApplePay,
        common::{
            BillingDetails, CurrencyCode, GatewayResponse, MerchantDescriptor, Meta,
            PaymentFacilitator, PaymentType, Profile, ReturnLink, TransactionRequestStatus,
        },
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

/// Purpose of the funds sent by a credit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionIntentCredit {
    WalletCryptoOffRamp,
    CryptoOffRamp,
    TravelAndTourism,
    Education,
    MedicalTreatment,
    Savings,
    Charity,
    Other,
    Salary,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditRequest {
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub currency_code: Option<CurrencyCode>,
    pub payment_handle_token: Option<String>,
    pub customer_ip: Option<String>,
    pub description: Option<String>,
    pub dup_check: Option<bool>,
    pub transaction_intent: Option<TransactionIntentCredit>,
    pub sender: Option<Sender>,
    pub profile: Option<Profile>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub payment_facilitator: Option<PaymentFacilitator>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

/// Fraud report on an Interac e-Transfer standalone credit.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditUpdateRequest {
    pub merchant_ref_num: Option<String>,
    #[serde(rename = "interacEtransfer")]
    pub interac_etransfer: Option<Interac>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCredit {
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
    /// Identifier assigned by the card scheme to the credit.
    pub card_scheme_transaction_id: Option<String>,
    pub card: Option<CardWithOptionalNetworkTokenOrApplePay>,
    pub skrill: Option<Skrill>,
    pub neteller: Option<Neteller>,
    #[serde(rename = "payPal")]
    pub paypal: Option<Paypal>,
    pub venmo: Option<Venmo>,
    pub vippreferred: Option<Vippreferred>,
    #[serde(rename = "interacETransfer")]
    pub interac_etransfer: Option<Interac>,
    pub ach: Option<Ach>,
    pub eft: Option<Eft>,
    pub bacs: Option<Bacs>,
    pub sepa: Option<Sepa>,
    pub return_links: Option<Vec<ReturnLink>>,
    pub sender: Option<Sender>,
    pub profile: Option<Profile>,
    pub billing_details: Option<BillingDetails>,
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
pub struct StandaloneCreditList {
    pub standalone_credits: Option<Vec<StandaloneCredit>>,
    pub meta: Option<Meta>,
}
