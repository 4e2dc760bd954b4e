use serde::{Deserialize, Serialize};
use crate::seat::Seat;

/// A ranked suggestion: one seat, or a block of neighbouring seats in one row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub seats: Vec<Seat>,
    pub score: f64,
    pub reason: String,
}

impl Recommendation {
    pub fn new(seats: Vec<Seat>, score: f64, reason: String) -> Self {
        Self { seats, score, reason }
    }

    pub fn is_group(&self) -> bool {
        self.seats.len() > 1
    }
}
