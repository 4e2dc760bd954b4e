use std::collections::HashMap;
use std::sync::Arc;
use altis_api::{app, AppState};
use altis_core::{Recommendation, Seat, SeatStatus};
use altis_seating::{generator::build_cabin, layout::aircraft_for, SeatMapGenerator};
use altis_store::{InMemorySeatStore, JsonFlightRepository};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

const FLIGHTS: &str = r#"[
    {
        "id": 5, "flight_number": "FL105", "origin": "Tallinn", "destination": "London",
        "departure_date": "2025-04-15", "departure_time": "08:30:00",
        "arrival_date": "2025-04-15", "arrival_time": "10:45:00",
        "price": 199.99, "aircraft_type": "A320", "available_seats": 162
    },
    {
        "id": 6, "flight_number": "FL106", "origin": "Tallinn", "destination": "Paris",
        "departure_date": "2025-04-16", "departure_time": "14:00:00",
        "arrival_date": "2025-04-16", "arrival_time": "16:40:00",
        "price": 149.5, "aircraft_type": "B737", "available_seats": 162
    }
]"#;

struct TestApp {
    router: Router,
    _dir: tempfile::TempDir,
}

fn test_app(store: InMemorySeatStore) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let flights_path = dir.path().join("flights.json");
    std::fs::write(&flights_path, FLIGHTS).unwrap();

    let state = AppState::new(Arc::new(store), Arc::new(JsonFlightRepository::new(flights_path)));
    TestApp { router: app(state), _dir: dir }
}

fn seeded_app() -> TestApp {
    test_app(InMemorySeatStore::new(SeatMapGenerator::default(), Some(17)))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = seeded_app();
    let (status, body) = send(&app.router, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_flight_listing_and_filters() {
    let app = seeded_app();

    let (status, body) = send(&app.router, get("/api/flights")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app.router, get("/api/flights?destination=paris&max_price=150")).await;
    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["id"], 6);

    let (_, body) = send(&app.router, get("/api/flights?min_departure_time=09:00:00")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(&app.router, get("/api/flights/5")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app.router, get("/api/flights/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Flight not found");
}

#[tokio::test]
async fn test_seat_map_is_reused() {
    let app = seeded_app();

    let (status, first) = send(&app.router, get("/api/seats/5")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app.router, get("/api/seats/5")).await;
    assert_eq!(first, second);

    let seats: Vec<Seat> = serde_json::from_value(first).unwrap();
    assert_eq!(seats.len(), 180);
}

#[tokio::test]
async fn test_default_recommendations_for_flight_five() {
    let app = seeded_app();

    let (status, body) = send(&app.router, post_json("/api/seats/5/recommendations", "{}")).await;
    assert_eq!(status, StatusCode::OK);

    let recs: Vec<Recommendation> = serde_json::from_value(body).unwrap();
    assert!(!recs.is_empty() && recs.len() <= 3);
    assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
}

#[tokio::test]
async fn test_window_reason_in_response() {
    let app = seeded_app();

    let (status, body) = send(
        &app.router,
        post_json("/api/seats/5/recommendations", r#"{ "window_preference": 0.8, "limit": 2 }"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let recs: Vec<Recommendation> = serde_json::from_value(body).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].reason, "This seat is recommended because it's a window seat.");
}

#[tokio::test]
async fn test_group_recommendations() {
    let app = seeded_app();

    let (status, body) = send(
        &app.router,
        post_json(
            "/api/seats/5/recommendations",
            r#"{ "legroom_preference": 0.9, "passenger_count": 3, "adjacent_seats": true }"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let recs: Vec<Recommendation> = serde_json::from_value(body).unwrap();
    assert_eq!(recs.len(), 3);
    for rec in &recs {
        assert_eq!(rec.seats.len(), 3);
        let row = rec.seats[0].location.row;
        assert!(rec.seats.iter().all(|s| s.location.row == row));
        assert!(rec.reason.starts_with(&format!("These 3 seats are adjacent in row {}", row)));
    }
}

#[tokio::test]
async fn test_invalid_weights_are_bad_request() {
    let app = seeded_app();

    let (status, body) = send(
        &app.router,
        post_json("/api/seats/5/recommendations", r#"{ "window_preference": 1.7 }"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("window_preference"));
}

#[tokio::test]
async fn test_fully_booked_flight_is_not_found() {
    let mut seats = build_cabin(9, aircraft_for(9).1);
    for seat in seats.iter_mut() {
        seat.status = SeatStatus::Occupied;
    }
    let app = test_app(InMemorySeatStore::with_seats(HashMap::from([(9, seats)])));

    let (status, body) = send(&app.router, post_json("/api/seats/9/recommendations", "{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Could not generate recommendations");
}

#[tokio::test]
async fn test_flight_id_zero_is_bad_request() {
    let app = seeded_app();

    let (status, body) = send(&app.router, get("/api/seats/0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "flight_id must be a positive integer");

    let (status, _) = send(&app.router, post_json("/api/seats/0/recommendations", "{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
