use altis_core::{Seat, SeatLocation, SeatStatus, SeatType};
use rand::seq::index;
use rand::Rng;
use tracing::debug;
use crate::layout::{aircraft_for, AircraftLayout};

pub const DEFAULT_OCCUPANCY_RATIO: f64 = 0.1;

/// Builds the seat map of a flight from its aircraft layout
#[derive(Debug, Clone)]
pub struct SeatMapGenerator {
    occupancy_ratio: f64,
}

impl Default for SeatMapGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OCCUPANCY_RATIO)
    }
}

impl SeatMapGenerator {
    /// `occupancy_ratio` is clamped to `[0, 1]`.
    pub fn new(occupancy_ratio: f64) -> Self {
        let occupancy_ratio = if occupancy_ratio.is_finite() {
            occupancy_ratio.clamp(0.0, 1.0)
        } else {
            DEFAULT_OCCUPANCY_RATIO
        };
        Self { occupancy_ratio }
    }

    /// Generate the full seat map for a flight, marking a random subset occupied.
    pub fn generate<R: Rng + ?Sized>(&self, flight_id: u64, rng: &mut R) -> Vec<Seat> {
        let (aircraft_type, layout) = aircraft_for(flight_id);
        let mut seats = build_cabin(flight_id, layout);

        let occupied = (seats.len() as f64 * self.occupancy_ratio).floor() as usize;
        for i in index::sample(rng, seats.len(), occupied.min(seats.len())) {
            seats[i].status = SeatStatus::Occupied;
        }

        debug!(
            "Generated {} seats for flight {} ({}), {} occupied",
            seats.len(), flight_id, aircraft_type, occupied
        );
        seats
    }
}

/// Every seat of the layout, all available, in (row, column) order.
/// Ids count up from 1 in the same order so they are stable per flight.
pub fn build_cabin(flight_id: u64, layout: &AircraftLayout) -> Vec<Seat> {
    let mut seats = Vec::with_capacity(layout.seat_count());
    let mut seat_id = 1;

    for row in layout.rows.clone() {
        for &(column, position) in layout.columns {
            let mut types = vec![position];
            if layout.is_exit_row(row) {
                types.push(SeatType::ExitRow);
            }
            if layout.has_extra_legroom(row) {
                types.push(SeatType::ExtraLegroom);
            }

            seats.push(Seat {
                id: seat_id,
                flight_id,
                location: SeatLocation { row, column },
                types,
                status: SeatStatus::Available,
                exit_proximity: layout.exit_proximity(row),
            });
            seat_id += 1;
        }
    }

    seats
}
