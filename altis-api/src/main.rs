use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use altis_api::{app, AppState};
use altis_seating::SeatMapGenerator;
use altis_store::{app_config::Config, JsonFlightRepository, JsonSeatStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "altis_api=debug,altis_seating=debug,altis_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Altis seating API on port {}", config.server.port);

    let generator = SeatMapGenerator::new(config.seating.occupancy_ratio);
    let seat_store = Arc::new(JsonSeatStore::new(
        &config.storage.data_dir,
        generator,
        config.seating.occupancy_seed,
    ));
    let flight_repo = Arc::new(JsonFlightRepository::new(&config.storage.flights_file));

    let app = app(AppState::new(seat_store, flight_repo));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
