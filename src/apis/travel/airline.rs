use super::Passenger;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComputerizedReservationSystem {
    Strt,
    Pars,
    Dats,
    Sabr,
    Dala,
    Blan,
    Derd,
    Tuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ServiceClass {
    #[serde(rename = "F")]
    First,
    #[serde(rename = "J")]
    Business,
    #[serde(rename = "W")]
    PremiumEconomy,
    #[serde(rename = "Y")]
    Economy,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AgencyAddress {
    pub street: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelAgency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub agency_address: Option<AgencyAddress>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_number: Option<String>,
    pub is_restricted_ticket: Option<bool>,
    pub city_of_ticket_issuing: Option<String>,
    pub ticket_delivery_method: Option<String>,
    pub is_agency_card: Option<bool>,
    pub ticket_issue_date: Option<String>,
    /// Decimal price, kept as the exact JSON number sent or received.
    pub ticket_price: Option<serde_json::Number>,
    pub number_of_pax: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub carrier_code: Option<String>,
    pub flight_number: Option<String>,
    pub airline_name: Option<String>,
    pub airline_icao_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub fare: Option<String>,
    pub service_class: Option<ServiceClass>,
    pub service_class_fee: Option<String>,
    pub is_stop_over_allowed: Option<bool>,
    pub departure_airport: Option<String>,
    pub destination: Option<String>,
    pub fare_basis: Option<String>,
    pub departure_date: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub conjunction_ticket: Option<String>,
    pub coupon_number: Option<String>,
    pub notation: Option<String>,
    pub taxes: Option<String>,
    pub flight: Option<Flight>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TripLegs {
    pub leg1: Option<Leg>,
    pub leg2: Option<Leg>,
    pub leg3: Option<Leg>,
    pub leg4: Option<Leg>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Passengers {
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

/// Airline itinerary, used for interchange qualification on airline payments.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirlineTravelDetails {
    pub passenger_name_record: Option<String>,
    pub passenger_name: Option<String>,
    pub departure_date: Option<String>,
    pub origin: Option<String>,
    pub computerized_reservation_system: Option<ComputerizedReservationSystem>,
    pub additional_booking_reference: Option<String>,
    pub total_fare: Option<u64>,
    pub total_fee: Option<u64>,
    pub total_taxes: Option<u64>,
    pub ticket: Option<Ticket>,
    pub passengers: Option<Passengers>,
    pub customer_reference_number: Option<String>,
    pub travel_agency: Option<TravelAgency>,
    pub trip_legs: Option<TripLegs>,
}
