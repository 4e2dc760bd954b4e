use serde::{Deserialize, Serialize};
use crate::{CoreError, CoreResult};

pub const DEFAULT_LIMIT: usize = 3;

/// What a passenger (or party) is looking for in a seat.
///
/// Weights are additive coefficients in `[0, 1]`; they are not normalised
/// against each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeatPreference {
    pub window_preference: f64,
    pub legroom_preference: f64,
    pub exit_proximity_preference: f64,
    pub passenger_count: u32,
    pub adjacent_seats: bool,
    pub limit: usize,
}

impl Default for SeatPreference {
    fn default() -> Self {
        Self {
            window_preference: 0.0,
            legroom_preference: 0.0,
            exit_proximity_preference: 0.0,
            passenger_count: 1,
            adjacent_seats: true,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SeatPreference {
    /// Reject weights outside `[0, 1]` and empty parties before they reach scoring.
    pub fn validate(&self) -> CoreResult<()> {
        let weights = [
            ("window_preference", self.window_preference),
            ("legroom_preference", self.legroom_preference),
            ("exit_proximity_preference", self.exit_proximity_preference),
        ];

        for (name, value) in weights {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CoreError::ValidationError(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        if self.passenger_count == 0 {
            return Err(CoreError::ValidationError("passenger_count must be at least 1".to_string()));
        }

        if self.limit == 0 {
            return Err(CoreError::ValidationError("limit must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Whether the request needs a block of neighbouring seats.
    pub fn wants_group(&self) -> bool {
        self.passenger_count > 1 && self.adjacent_seats
    }
}
