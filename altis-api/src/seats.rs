use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json,
    Router,
};
use altis_core::repository::SeatStore;
use altis_core::{Recommendation, Seat, SeatPreference};
use tracing::info;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{flight_id}", get(list_seats))
        .route("/{flight_id}/recommendations", post(recommend_seats))
}

fn check_flight_id(flight_id: u64) -> Result<u64, AppError> {
    if flight_id == 0 {
        return Err(AppError::ValidationError("flight_id must be a positive integer".to_string()));
    }
    Ok(flight_id)
}

/// GET /api/seats/{flight_id}
/// Full seat map, generated on first request
async fn list_seats(
    State(state): State<AppState>,
    Path(flight_id): Path<u64>,
) -> Result<Json<Vec<Seat>>, AppError> {
    let flight_id = check_flight_id(flight_id)?;
    let seats = state.seat_store.get_or_create(flight_id).await?;

    if seats.is_empty() {
        return Err(AppError::NotFoundError("No seats found for this flight".to_string()));
    }

    Ok(Json(seats))
}

/// POST /api/seats/{flight_id}/recommendations
/// Body is a SeatPreference; omitted fields take their defaults
async fn recommend_seats(
    State(state): State<AppState>,
    Path(flight_id): Path<u64>,
    Json(preferences): Json<SeatPreference>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let flight_id = check_flight_id(flight_id)?;
    let recommendations = state.recommender.recommend(flight_id, &preferences).await?;

    if recommendations.is_empty() {
        return Err(AppError::NotFoundError("Could not generate recommendations".to_string()));
    }

    info!("Returning {} recommendations for flight {}", recommendations.len(), flight_id);
    Ok(Json(recommendations))
}
