use std::sync::Arc;
use altis_core::repository::SeatStore;
use altis_core::{CoreResult, Recommendation, Seat, SeatPreference};
use tracing::{debug, info};
use crate::adjacency::group_adjacent_seats;
use crate::reason::seat_reason;
use crate::scoring::rank_seats;

/// Turns a flight's seat map and a passenger's preferences into ranked suggestions
#[derive(Clone)]
pub struct SeatRecommender {
    store: Arc<dyn SeatStore>,
}

impl SeatRecommender {
    pub fn new(store: Arc<dyn SeatStore>) -> Self {
        Self { store }
    }

    /// Recommend seats for a flight.
    ///
    /// An empty list means nothing fits (no free seats, or no block large
    /// enough for the party). Invalid preferences and store failures are errors.
    pub async fn recommend(&self, flight_id: u64, preferences: &SeatPreference) -> CoreResult<Vec<Recommendation>> {
        preferences.validate()?;

        let all_seats = self.store.get_or_create(flight_id).await?;
        let available: Vec<&Seat> = all_seats.iter().filter(|s| s.is_available()).collect();

        if available.is_empty() {
            info!("Flight {} has no available seats", flight_id);
            return Ok(Vec::new());
        }

        if preferences.wants_group() {
            let groups = group_adjacent_seats(&available, preferences);
            debug!(
                "Flight {}: {} adjacent blocks for {} passengers",
                flight_id, groups.len(), preferences.passenger_count
            );
            return Ok(groups);
        }

        let recommendations: Vec<Recommendation> = rank_seats(&available, preferences)
            .into_iter()
            .take(preferences.limit)
            .map(|(seat, score)| Recommendation::new(vec![seat.clone()], score, seat_reason(seat, preferences)))
            .collect();

        debug!("Flight {}: {} single-seat recommendations", flight_id, recommendations.len());
        Ok(recommendations)
    }
}
