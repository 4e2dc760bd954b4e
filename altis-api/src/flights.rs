use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json,
    Router,
};
use altis_core::{Flight, FlightFilter};
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_flights))
        .route("/{flight_id}", get(get_flight))
}

/// GET /api/flights?destination=&departure_date=&max_price=&min_departure_time=&max_departure_time=
async fn list_flights(
    State(state): State<AppState>,
    Query(filter): Query<FlightFilter>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = state.catalog.search(&filter).await?;
    Ok(Json(flights))
}

/// GET /api/flights/{flight_id}
async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<u64>,
) -> Result<Json<Flight>, AppError> {
    state
        .catalog
        .get(flight_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Flight not found".to_string()))
}
