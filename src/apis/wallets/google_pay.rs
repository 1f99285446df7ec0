use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayBillingAddress {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub administrative_area: Option<String>,
    pub country_code: Option<String>,
    pub locality: Option<String>,
    pub name: Option<String>,
    pub postal_code: Option<u32>,
    pub sorting_code: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayDecryptedTokenPaymentMethodDetails {
    pub auth_method: Option<String>,
    pub pan: Option<String>,
    pub expiration_month: Option<u32>,
    pub expiration_year: Option<u32>,
    pub cryptogram: Option<String>,
    pub eci_indicator: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayDecryptedToken {
    pub gateway_merchant_id: Option<String>,
    pub message_id: Option<String>,
    pub message_expiration: Option<String>,
    pub payment_method_details: Option<GooglePayDecryptedTokenPaymentMethodDetails>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentMethodDataTokenizationData {
    pub token: Option<String>,
    pub r#type: Option<String>,
    pub decrypted_token: Option<GooglePayDecryptedToken>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentMethodDataInfo {
    pub billing_address: Option<GooglePayBillingAddress>,
    pub card_details: Option<u32>,
    pub card_network: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentMethodData {
    pub description: Option<String>,
    pub info: Option<GooglePayPaymentMethodDataInfo>,
    pub tokenization_data: Option<GooglePayPaymentMethodDataTokenizationData>,
    pub r#type: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentToken {
    pub api_version: Option<u32>,
    pub api_version_minor: Option<u32>,
    pub payment_method_data: Option<GooglePayPaymentMethodData>,
}

/// Google Pay payment token received from the customer's device.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GooglePay {
    pub google_pay_payment_token: Option<GooglePayPaymentToken>,
}
