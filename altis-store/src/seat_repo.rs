use altis_core::repository::SeatStore;
use altis_core::{CoreError, CoreResult, Seat};
use altis_seating::SeatMapGenerator;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

fn occupancy_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn store_error(context: &str, path: &Path, err: impl std::fmt::Display) -> CoreError {
    CoreError::StoreError(format!("{} {}: {}", context, path.display(), err))
}

/// Seat maps persisted as one JSON file per flight.
///
/// A map is written to a uniquely named scratch file and persisted without
/// clobbering, so a flight's file appears complete or not at all, and only the
/// first writer wins even across processes sharing the directory.
pub struct JsonSeatStore {
    data_dir: PathBuf,
    generator: SeatMapGenerator,
    rng: Mutex<StdRng>,
    creation_locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl JsonSeatStore {
    pub fn new(data_dir: impl Into<PathBuf>, generator: SeatMapGenerator, seed: Option<u64>) -> Self {
        Self {
            data_dir: data_dir.into(),
            generator,
            rng: Mutex::new(occupancy_rng(seed)),
            creation_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn seat_map_path(&self, flight_id: u64) -> PathBuf {
        self.data_dir.join(format!("flight_{}_seats.json", flight_id))
    }

    async fn load(&self, path: &Path) -> CoreResult<Option<Vec<Seat>>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let seats = serde_json::from_slice(&bytes)
                    .map_err(|e| store_error("Corrupt seat map", path, e))?;
                Ok(Some(seats))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(store_error("Failed to read", path, e)),
        }
    }

    async fn creation_lock(&self, flight_id: u64) -> Arc<Mutex<()>> {
        let mut locks = self.creation_locks.lock().await;
        locks.entry(flight_id).or_default().clone()
    }

    /// Drop the per-flight lock once no other task holds or waits on it.
    async fn release_creation_lock(&self, flight_id: u64, lock: &Arc<Mutex<()>>) {
        let mut locks = self.creation_locks.lock().await;
        // One reference in the map, one held by the caller
        if Arc::strong_count(lock) <= 2 {
            locks.remove(&flight_id);
        }
    }

    async fn create(&self, flight_id: u64, path: &Path) -> CoreResult<Vec<Seat>> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| store_error("Failed to create", &self.data_dir, e))?;

        let seats = {
            let mut rng = self.rng.lock().await;
            self.generator.generate(flight_id, &mut *rng)
        };

        let payload = serde_json::to_vec_pretty(&seats)
            .map_err(|e| store_error("Failed to encode", path, e))?;

        let data_dir = self.data_dir.clone();
        let target = path.to_path_buf();
        let published = tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut scratch = tempfile::Builder::new()
                .prefix(&format!(".flight_{}_seats.", flight_id))
                .suffix(".tmp")
                .tempfile_in(&data_dir)?;
            scratch.write_all(&payload)?;
            scratch.as_file().sync_all()?;
            scratch.persist_noclobber(&target).map(|_| ()).map_err(|e| e.error)
        })
        .await
        .map_err(|e| store_error("Seat map writer failed for", path, e))?;

        match published {
            Ok(()) => {
                info!("Created seat map for flight {} with {} seats", flight_id, seats.len());
                Ok(seats)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!("Seat map for flight {} was created concurrently, using existing map", flight_id);
                self.load(path)
                    .await?
                    .ok_or_else(|| store_error("Seat map vanished", path, "not found after create race"))
            }
            Err(e) => Err(store_error("Failed to publish", path, e)),
        }
    }
}

#[async_trait]
impl SeatStore for JsonSeatStore {
    async fn get_or_create(&self, flight_id: u64) -> CoreResult<Vec<Seat>> {
        let path = self.seat_map_path(flight_id);

        if let Some(seats) = self.load(&path).await? {
            return Ok(seats);
        }

        let lock = self.creation_lock(flight_id).await;
        let result = {
            let _guard = lock.lock().await;

            // Another task may have finished while we waited
            match self.load(&path).await {
                Ok(Some(seats)) => Ok(seats),
                Ok(None) => self.create(flight_id, &path).await,
                Err(e) => Err(e),
            }
        };

        self.release_creation_lock(flight_id, &lock).await;
        result
    }
}

/// Process-local seat maps, used by tests and ephemeral deployments.
pub struct InMemorySeatStore {
    generator: SeatMapGenerator,
    state: Mutex<InMemoryState>,
}

struct InMemoryState {
    rng: StdRng,
    seat_maps: HashMap<u64, Vec<Seat>>,
}

impl InMemorySeatStore {
    pub fn new(generator: SeatMapGenerator, seed: Option<u64>) -> Self {
        Self {
            generator,
            state: Mutex::new(InMemoryState {
                rng: occupancy_rng(seed),
                seat_maps: HashMap::new(),
            }),
        }
    }

    /// Store preloaded with fixed seat maps.
    pub fn with_seats(seat_maps: HashMap<u64, Vec<Seat>>) -> Self {
        Self {
            generator: SeatMapGenerator::default(),
            state: Mutex::new(InMemoryState {
                rng: occupancy_rng(None),
                seat_maps,
            }),
        }
    }
}

#[async_trait]
impl SeatStore for InMemorySeatStore {
    async fn get_or_create(&self, flight_id: u64) -> CoreResult<Vec<Seat>> {
        let mut state = self.state.lock().await;
        let InMemoryState { rng, seat_maps } = &mut *state;

        let seats = seat_maps.entry(flight_id).or_insert_with(|| {
            info!("Created in-memory seat map for flight {}", flight_id);
            self.generator.generate(flight_id, rng)
        });

        Ok(seats.clone())
    }
}
