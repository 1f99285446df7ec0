use crate::{
    apis::{
        common::{DateOfBirth, Locale},
        customer_payment_handles::CustomerPaymentHandle,
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerStatus {
    Initial,
    Active,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AddressStatus {
    Active,
    Initial,
}

/// Sub-resources that can be embedded in a customer response.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CustomerField {
    Addresses,
    PaymentHandles,
}

impl CustomerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerField::Addresses => "addresses",
            CustomerField::PaymentHandles => "paymenthandles",
        }
    }
}

/// Postal address stored on a customer profile.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Option<String>,
    pub status: Option<AddressStatus>,
    pub nick_name: Option<String>,
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub default_shipping_address_indicator: Option<bool>,
    pub error: Option<PaysafeError>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub merchant_customer_id: Option<String>,
    pub locale: Option<Locale>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<DateOfBirth>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cell_phone: Option<String>,
    pub nationality: Option<String>,
    pub ip: Option<String>,
    pub payment_handle_token_from: Option<String>,
    pub account_id: Option<String>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

/// Customer profile, as returned by the vault.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub merchant_customer_id: Option<String>,
    pub locale: Option<Locale>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<DateOfBirth>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cell_phone: Option<String>,
    pub nationality: Option<String>,
    pub ip: Option<String>,
    pub status: Option<CustomerStatus>,
    pub payment_token: Option<String>,
    pub payment_handle_token_from: Option<String>,
    pub addresses: Option<Vec<Address>>,
    pub payment_handles: Option<Vec<CustomerPaymentHandle>>,
    pub error: Option<PaysafeError>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}
