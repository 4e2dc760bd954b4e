pub mod seat;
pub mod preference;
pub mod recommendation;
pub mod flight;
pub mod repository;

pub use seat::{Seat, SeatLocation, SeatStatus, SeatType};
pub use preference::SeatPreference;
pub use recommendation::Recommendation;
pub use flight::{Flight, FlightFilter};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Seat store failure: {0}")]
    StoreError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
