use async_trait::async_trait;
use crate::flight::Flight;
use crate::seat::Seat;
use crate::CoreResult;

/// Owner of persisted seat maps, keyed by flight id.
#[async_trait]
pub trait SeatStore: Send + Sync {
    /// Return the seat map for a flight, generating and persisting it on first use.
    ///
    /// Implementations must generate at most once per flight id, even when
    /// first requests race.
    async fn get_or_create(&self, flight_id: u64) -> CoreResult<Vec<Seat>>;
}

/// Repository trait for flight catalog data access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn list_flights(&self) -> CoreResult<Vec<Flight>>;

    async fn get_flight(&self, id: u64) -> CoreResult<Option<Flight>>;
}
