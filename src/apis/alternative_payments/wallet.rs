use super::CountryCode;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LanguageCode {
    #[serde(rename = "AT")]
    At,
    #[serde(rename = "AU")]
    Au,
    #[serde(rename = "BE")]
    Be,
    #[serde(rename = "BR")]
    Br,
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "CH")]
    Ch,
    #[serde(rename = "CN")]
    Cn,
    #[serde(rename = "DE")]
    De,
    #[serde(rename = "ES")]
    Es,
    #[serde(rename = "FR")]
    Fr,
    #[serde(rename = "GB")]
    Gb,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "NL")]
    Nl,
    #[serde(rename = "PL")]
    Pl,
    #[serde(rename = "PT")]
    Pt,
    #[serde(rename = "RU")]
    Ru,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "da_DK")]
    DaDk,
    #[serde(rename = "he_IL")]
    HeIl,
    #[serde(rename = "id_ID")]
    IdId,
    #[serde(rename = "ja_JP")]
    JaJp,
    #[serde(rename = "no_NO")]
    NoNo,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "sv_SE")]
    SvSe,
    #[serde(rename = "th_TH")]
    ThTh,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "zh_HK")]
    ZhHk,
    #[serde(rename = "zh_TW")]
    ZhTw,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum KycLevelRestriction {
    Full,
    Simple,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaypalShippingPreference {
    GetFromFile,
    NoShipping,
    SetProvidedAddress,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
    PaypalId,
}

/// Skrill digital wallet.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Skrill {
    pub consumer_id: Option<String>,
    pub email_subject: Option<String>,
    pub email_message: Option<String>,
    pub recipient_description: Option<String>,
    pub language: Option<LanguageCode>,
    pub logo_url: Option<String>,
    pub detail1_description: Option<String>,
    pub detail1_text: Option<String>,
    pub country_code: Option<CountryCode>,
}

/// Skrill wallet charged without redirection, up to a pre-agreed amount.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Skrill1Tap {
    pub consumer_id: Option<String>,
    pub max_amount: Option<u64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Neteller {
    pub consumer_id: Option<String>,
    pub recipient_description: Option<String>,
    pub logo_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Paysafecard {
    pub consumer_id: Option<String>,
    pub min_age_restriction: Option<u32>,
    pub kyc_level_restriction: Option<KycLevelRestriction>,
    pub country_restriction: Option<CountryCode>,
    pub submerchant_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Paysafecash {
    pub consumer_id: Option<String>,
    pub min_age_restriction: Option<u32>,
    pub kyc_level_restriction: Option<KycLevelRestriction>,
    pub country_restriction: Option<String>,
    pub expiration_time: Option<u32>,
}

/// PayPal account. Serialized under the `payPal` key by its parents.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Paypal {
    pub consumer_id: Option<String>,
    pub recipient_description: Option<String>,
    pub language: Option<LanguageCode>,
    pub shipping_preference: Option<PaypalShippingPreference>,
    pub consumer_message: Option<String>,
    pub order_description: Option<String>,
    pub recipient_type: Option<RecipientType>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Venmo {
    pub consumer_id: Option<String>,
    pub merchant_account_id: Option<String>,
    pub profile_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RapidTransfer {
    pub consumer_id: Option<String>,
    pub country_code: Option<String>,
}
