use std::sync::Arc;
use altis_catalog::FlightCatalog;
use altis_core::repository::{FlightRepository, SeatStore};
use altis_seating::SeatRecommender;

#[derive(Clone)]
pub struct AppState {
    pub seat_store: Arc<dyn SeatStore>,
    pub recommender: SeatRecommender,
    pub catalog: FlightCatalog,
}

impl AppState {
    pub fn new(seat_store: Arc<dyn SeatStore>, flight_repo: Arc<dyn FlightRepository>) -> Self {
        Self {
            recommender: SeatRecommender::new(seat_store.clone()),
            catalog: FlightCatalog::new(flight_repo),
            seat_store,
        }
    }
}
