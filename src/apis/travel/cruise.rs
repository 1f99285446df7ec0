use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "Other")]
    Other,
    #[serde(rename = "Not specified")]
    NotSpecified,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelPackageApplication {
    CarRentalReservation,
    AirlineReservation,
    CarRentalAndAirlineReservation,
    Unknown,
}

/// Traveller listed on an airline or cruise itinerary.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub ticket_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub passenger_code: Option<String>,
    pub gender: Option<Gender>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CruiselineTicket {
    pub ticket_number: Option<String>,
    pub is_restricted_ticket: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CruiselineLeg {
    pub fare: Option<u64>,
    pub service_class: Option<String>,
    pub departure_city: Option<String>,
    pub destination_city: Option<String>,
    pub departure_date: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CruiselineTripLegs {
    pub leg1: Option<CruiselineLeg>,
    pub leg2: Option<CruiselineLeg>,
    pub leg3: Option<CruiselineLeg>,
    pub leg4: Option<CruiselineLeg>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CruiselinePassengers {
    pub passenger1: Option<Passenger>,
    pub passenger2: Option<Passenger>,
    pub passenger3: Option<Passenger>,
    pub passenger4: Option<Passenger>,
    pub passenger5: Option<Passenger>,
    pub passenger6: Option<Passenger>,
    pub passenger7: Option<Passenger>,
    pub passenger8: Option<Passenger>,
    pub passenger9: Option<Passenger>,
    pub passenger10: Option<Passenger>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CruiselineTravelDetails {
    pub cruise_ship_name: Option<String>,
    pub passenger_name: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub origin_city: Option<String>,
    pub room_rate: Option<u64>,
    pub travel_package_application: Option<TravelPackageApplication>,
    pub ticket: Option<CruiselineTicket>,
    pub passengers: Option<CruiselinePassengers>,
    pub trip_legs: Option<CruiselineTripLegs>,
}
