use crate::{
    apis::{
        common::{DateOfBirth, Locale},
        customer_payment_handles::CustomerPaymentHandle,
        customers::Address,
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SingleUseTokenPaymentType {
    Card,
    Eft,
    Ach,
    Bacs,
    Sepa,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SingleUseCustomerTokenStatus {
    Initial,
    Active,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCustomerTokenRequest {
    pub merchant_ref_num: Option<String>,
    pub payment_type: Option<Vec<SingleUseTokenPaymentType>>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCustomerToken {
    pub id: Option<String>,
    pub merchant_ref_num: Option<String>,
    pub payment_type: Option<Vec<SingleUseTokenPaymentType>>,
    pub time_to_live_seconds: Option<u32>,
    pub status: Option<SingleUseCustomerTokenStatus>,
    pub single_use_customer_token: Option<String>,
    pub customer_id: Option<String>,
    pub locale: Option<Locale>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub date_of_birth: Option<DateOfBirth>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub ip: Option<String>,
    pub nationality: Option<String>,
    pub addresses: Option<Vec<Address>>,
    pub payment_handles: Option<Vec<CustomerPaymentHandle>>,
    pub error: Option<PaysafeError>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}
