use std::sync::Arc;
use altis_core::repository::FlightRepository;
use altis_core::{CoreResult, Flight, FlightFilter};
use tracing::debug;
use crate::filter::matches_filter;

/// Read-only flight listing with attribute filters
#[derive(Clone)]
pub struct FlightCatalog {
    repo: Arc<dyn FlightRepository>,
}

impl FlightCatalog {
    pub fn new(repo: Arc<dyn FlightRepository>) -> Self {
        Self { repo }
    }

    pub async fn search(&self, filter: &FlightFilter) -> CoreResult<Vec<Flight>> {
        let flights: Vec<Flight> = self
            .repo
            .list_flights()
            .await?
            .into_iter()
            .filter(|f| matches_filter(filter, f))
            .collect();

        debug!("Catalog search {:?} matched {} flights", filter, flights.len());
        Ok(flights)
    }

    pub async fn get(&self, id: u64) -> CoreResult<Option<Flight>> {
        self.repo.get_flight(id).await
    }
}
