use crate::apis::{
    cards::{CardExpiry, TokenStatus},
    common::CurrencyCode,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PaymentDataType {
    #[serde(rename = "EMV")]
    Emv,
    #[serde(rename = "3DSecure")]
    ThreeDSecure,
}

/// Apple Pay token details returned on cards paid with Apple Pay.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayTokenDetails {
    pub bin: Option<String>,
    pub last_digits: Option<String>,
    pub expiry: Option<CardExpiry>,
    pub status: Option<TokenStatus>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayBillingContact {
    pub address_lines: Option<Vec<String>>,
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub locality: Option<String>,
    pub phonetic_family_name: Option<String>,
    pub phonetic_given_name: Option<String>,
    pub postal_code: Option<String>,
    pub sub_administrative_area: Option<String>,
    pub sub_locality: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayDecryptedTokenPaymentData {
    pub online_payment_cryptogram: Option<String>,
    pub eci_indicator: Option<String>,
    pub emv_data: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayDecryptedData {
    pub application_primary_account_number: Option<String>,
    pub application_expiration_date: Option<String>,
    pub currency_code: Option<CurrencyCode>,
    pub transaction_amount: Option<String>,
    pub cardholder_name: Option<String>,
    pub device_manufacturer_identifier: Option<String>,
    pub payment_data_type: Option<PaymentDataType>,
    pub payment_data: Option<ApplePayDecryptedTokenPaymentData>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayTokenHeader {
    pub transaction_id: Option<String>,
    pub ephemeral_public_key: Option<String>,
    pub public_key_hash: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayTokenPaymentData {
    pub version: Option<String>,
    pub data: Option<String>,
    pub signature: Option<String>,
    pub header: Option<ApplePayTokenHeader>,
    pub decrypted_data: Option<ApplePayDecryptedData>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayPaymentMethod {
    pub display_name: Option<String>,
    pub network: Option<String>,
    pub r#type: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayTokenData {
    pub payment_data: Option<ApplePayTokenPaymentData>,
    pub payment_method: Option<ApplePayPaymentMethod>,
    pub transaction_identifier: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayPaymentToken {
    pub token: Option<ApplePayTokenData>,
    pub billing_contact: Option<ApplePayBillingContact>,
}

/// Apple Pay payment token received from the customer's device.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplePay {
    pub label: Option<String>,
    pub request_billing_address: Option<bool>,
    pub apple_pay_payment_token: Option<ApplePayPaymentToken>,
    pub billing_contact: Option<ApplePayBillingContact>,
}
