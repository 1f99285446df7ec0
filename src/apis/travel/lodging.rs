use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtraChargesType {
    Restaurant,
    GiftShop,
    MiniBar,
    Telephone,
    Other,
    Laundry,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramCode {
    Lodging,
    NoShow,
    AdvancedDeposit,
}

/// Hotel stay details.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LodgingDetails {
    pub hotel_folio_number: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub customer_service_phone: Option<String>,
    pub property_local_phone: Option<String>,
    pub extra_charges: Option<Vec<ExtraChargesType>>,
    pub room_rate: Option<u64>,
    pub program_code: Option<ProgramCode>,
    pub number_of_nights: Option<u32>,
    pub is_fire_safety_act_compliant: Option<bool>,
}
