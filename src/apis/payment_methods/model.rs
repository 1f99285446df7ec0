use crate::apis::common::{CurrencyCode, PaymentType};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Payment method available for a currency, together with the account processing it.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub payment_method: Option<PaymentType>,
    pub currency_code: Option<CurrencyCode>,
    pub account_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LookUpPaymentMethodsResponse {
    pub payment_methods: Option<Vec<PaymentMethod>>,
}
