use altis_core::repository::FlightRepository;
use altis_core::{CoreError, CoreResult, Flight};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Flight catalog backed by a JSON array on disk, re-read on every call
pub struct JsonFlightRepository {
    path: PathBuf,
}

impl JsonFlightRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FlightRepository for JsonFlightRepository {
    async fn list_flights(&self) -> CoreResult<Vec<Flight>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            CoreError::StoreError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let flights: Vec<Flight> = serde_json::from_slice(&bytes).map_err(|e| {
            CoreError::StoreError(format!("Invalid flight data in {}: {}", self.path.display(), e))
        })?;

        debug!("Loaded {} flights from {}", flights.len(), self.path.display());
        Ok(flights)
    }

    async fn get_flight(&self, id: u64) -> CoreResult<Option<Flight>> {
        let flights = self.list_flights().await?;
        Ok(flights.into_iter().find(|f| f.id == id))
    }
}
