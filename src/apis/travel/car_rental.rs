use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarRentalExtraChargeType {
    Gasoline,
    Mileage,
    LateReturn,
    OneWayServiceFee,
    DrivingViolation,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleClass {
    Mini,
    Subcompact,
    Economy,
    Compact,
    Midsize,
    Intermediate,
    Standard,
    FullSize,
    Luxury,
    Premium,
    Minivan,
    #[serde(rename = "VAN_12_PASSENGERS")]
    Van12Passengers,
    MovingVan,
    #[serde(rename = "VAN_15_PASSENGERS")]
    Van15Passengers,
    CargoVan,
    #[serde(rename = "TRUCK_12_FOOT")]
    Truck12Foot,
    #[serde(rename = "TRUCK_20_FOOT")]
    Truck20Foot,
    #[serde(rename = "TRUCK_24_FOOT")]
    Truck24Foot,
    #[serde(rename = "TRUCK_26_FOOT")]
    Truck26Foot,
    Moped,
    Stretch,
    Regular,
    Unique,
    Exotic,
    SmallOrMediumTruck,
    LargeTruck,
    SmallSuv,
    MediumSuv,
    LargeSuv,
    ExoticSuv,
    FourWheelDrive,
    Special,
    Miscellaneous,
}

/// Pick-up or drop-off point of a rental.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CarRentalLocation {
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CarRentalDetails {
    pub rental_agreement_number: Option<String>,
    pub renter_name: Option<String>,
    pub rental_days: Option<u32>,
    pub no_show: Option<bool>,
    pub extra_charges: Option<Vec<CarRentalExtraChargeType>>,
    pub customer_service_phone: Option<String>,
    pub return_details: Option<CarRentalLocation>,
    pub pickup_details: Option<CarRentalLocation>,
    pub vehicle_class: Option<VehicleClass>,
}
