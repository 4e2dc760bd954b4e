pub mod app_config;
pub mod seat_repo;
pub mod flight_repo;

pub use seat_repo::{InMemorySeatStore, JsonSeatStore};
pub use flight_repo::JsonFlightRepository;
