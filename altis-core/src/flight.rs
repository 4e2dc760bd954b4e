use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub id: u64,
    pub flight_number: String, // e.g. FL123
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub price: f64,
    pub aircraft_type: String,
    pub available_seats: u32,
}

/// Catalog search criteria. Every field is optional; unset fields match all flights.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlightFilter {
    pub destination: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub max_price: Option<f64>,
    pub min_departure_time: Option<NaiveTime>,
    pub max_departure_time: Option<NaiveTime>,
}
