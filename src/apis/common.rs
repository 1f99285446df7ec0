//! Payloads and vocabularies shared by several Paysafe APIs.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
};

/// ISO-4217 currency of an amount.
///
/// Amounts are always expressed in the minor units of the currency.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum CurrencyCode {
    Aed,
    Ars,
    Aud,
    Bgn,
    Bhd,
    Brl,
    Cad,
    Chf,
    Clp,
    Cny,
    Cop,
    Crc,
    Czk,
    Dkk,
    Egp,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Idr,
    Ils,
    Inr,
    Isk,
    Jpy,
    Kes,
    Krw,
    Kwd,
    Mad,
    Mxn,
    Myr,
    Ngn,
    Nok,
    Nzd,
    Omr,
    Pen,
    Php,
    Pln,
    Qar,
    Ron,
    Rsd,
    Rub,
    Sar,
    Sek,
    Sgd,
    Thb,
    Try,
    Twd,
    Uah,
    Usd,
    Uyu,
    Vnd,
    Zar,
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Unit variants always serialize to a plain string
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(s)) => f.write_str(&s),
            _ => Err(std::fmt::Error),
        }
    }
}

/// Payment method of a payment handle, payment or credit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum PaymentType {
    Card,
    Skrill,
    Neteller,
    Paysafecash,
    Paysafecard,
    Paypal,
    #[serde(rename = "PAY BY BANK")]
    PayByBank,
    Venmo,
    Vippreferred,
    Mazooma,
    Mbway,
    Multibanco,
    Sightline,
    InteracEtransfer,
    RapidTransfer,
    #[serde(rename = "SKRILL1TAP")]
    Skrill1Tap,
    Ach,
    Eft,
    Bacs,
    Sepa,
    OnlineBankTransfer,
    Pix,
    Khipu,
    Mach,
    BoletoBancario,
    #[serde(rename = "SAFETYPAY_CASH")]
    SafetypayCash,
}

/// Status of a settlement, refund or credit, also used to cancel them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionRequestStatus {
    Received,
    Initiated,
    Pending,
    Failed,
    Cancelled,
    Expired,
    Completed,
}

/// Body of the requests cancelling a payment, settlement, refund or credit.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub status: Option<TransactionRequestStatus>,
}

impl CancelRequest {
    /// Request moving the transaction to [`TransactionRequestStatus::Cancelled`].
    pub fn cancelled() -> Self {
        Self {
            status: Some(TransactionRequestStatus::Cancelled),
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub status: Option<TransactionRequestStatus>,
    pub id: Option<String>,
    pub txn_time: Option<String>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

/// Pagination details of list responses.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub number_of_records: Option<u32>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReturnLinkRel {
    RedirectPayment,
    RedirectRegistration,
    OnCompleted,
    Default,
    OnFailed,
    OnCancelled,
}

/// Link where the customer is sent back after an alternative payment flow.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ReturnLink {
    pub rel: Option<ReturnLinkRel>,
    pub href: Option<String>,
    pub method: Option<String>,
}

/// Link returned by the API, e.g. the redirect of a payment handle with `action == REDIRECT`.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    pub rel: Option<ReturnLinkRel>,
    pub href: Option<String>,
    pub method: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    pub nick_name: Option<String>,
    pub street: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ShipMethod {
    #[serde(rename = "N")]
    NextDay,
    #[serde(rename = "T")]
    TwoDay,
    #[serde(rename = "C")]
    LowestCost,
    #[serde(rename = "O")]
    Other,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub ship_method: Option<ShipMethod>,
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DateOfBirth {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "fr_CA")]
    FrCa,
    #[serde(rename = "en_CA")]
    EnCa,
    #[serde(rename = "en_GB")]
    EnGb,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationState {
    NotVerified,
    Verified,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDocument {
    pub r#type: Option<String>,
    pub document_number: Option<String>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

/// Customer profile attached to payment handles and payments.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Option<String>,
    pub status: Option<String>,
    pub merchant_customer_id: Option<String>,
    pub locale: Option<Locale>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "emailverified")]
    pub email_verified: Option<VerificationState>,
    pub phone_verified: Option<VerificationState>,
    pub date_of_birth: Option<DateOfBirth>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    #[serde(rename = "IdentityDocument")]
    pub identity_documents: Option<Vec<IdentityDocument>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvsResponse {
    Match,
    MatchAddressOnly,
    MatchZipOnly,
    NoMatch,
    NotProcessed,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NameVerification {
    Match,
    PartialMatch,
    NoMatch,
    NotProcessed,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CvvVerification {
    Match,
    NoMatch,
    NotProcessed,
    Unknown,
}

/// Details returned by the acquirer or the alternative payment provider.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub id: Option<String>,
    pub processor: Option<String>,
    pub code: Option<String>,
    pub response_code: Option<String>,
    pub response_code_description: Option<String>,
    pub avs_code: Option<String>,
    pub avs_response: Option<AvsResponse>,
    pub name_verification: Option<NameVerification>,
    pub first_name_verification: Option<NameVerification>,
    pub last_name_verification: Option<NameVerification>,
    pub balance_response: Option<String>,
    pub mid: Option<String>,
    pub terminal_id: Option<String>,
    pub batch_number: Option<String>,
    pub seq_number: Option<String>,
    pub effective_date: Option<String>,
    pub financing_type: Option<String>,
    pub plan: Option<String>,
    pub grace_period: Option<String>,
    pub term: Option<String>,
    pub response_id: Option<String>,
    pub request_id: Option<String>,
    pub description: Option<String>,
    pub auth_code: Option<String>,
    pub txn_date_time: Option<String>,
    pub reference_nbr: Option<String>,
    pub response_reason_code: Option<String>,
    pub cvv_verification: Option<CvvVerification>,
    pub cvv2_result: Option<String>,
    pub status: Option<String>,
    pub order_id: Option<String>,
    pub operation_id: Option<String>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MandateRequestStatus {
    Pending,
    Active,
    Cancelled,
    Inactive,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MandateStatusReason {
    MerchantCancelled,
    BankCancelled,
    Declined,
    Rejected,
    Disputed,
    Unauthorized,
    Transferred,
}

/// Direct debit mandate of a BACS or SEPA payment.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Mandate {
    pub id: Option<String>,
    pub reference: Option<String>,
    pub status: Option<MandateRequestStatus>,
    pub status_reason: Option<MandateStatusReason>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoredCredentialType {
    Adhoc,
    Topup,
    Recurring,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoredCredentialOccurrence {
    Initial,
    Subsequent,
}

/// Card-on-file details of a payment.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoredCredential {
    pub r#type: Option<StoredCredentialType>,
    pub occurrence: Option<StoredCredentialOccurrence>,
    pub initial_transaction_id: Option<String>,
    pub external_initial_transaction_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SubMerchantAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SubMerchant {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub address: Option<SubMerchantAddress>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFacilitator {
    pub sub_merchant: Option<SubMerchant>,
}

/// Descriptor shown on the customer's statement.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDescriptor {
    pub dynamic_descriptor: Option<String>,
    pub phone: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    pub device_id: Option<String>,
}

/// Share of an amount forwarded to a linked account.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Splitpay {
    pub linked_account: Option<String>,
    pub amount: Option<u64>,
    pub percent: Option<u32>,
}
