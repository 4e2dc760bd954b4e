use serde::{Deserialize, Serialize};

/// Category tags a seat can carry. A seat usually has one positional tag
/// (window/middle/aisle) plus any number of the row-derived ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SeatType {
    Window,
    Middle,
    Aisle,
    ExitRow,
    ExtraLegroom,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Occupied,
}

/// Physical position of a seat in the cabin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SeatLocation {
    pub row: u32,
    pub column: char,
}

impl SeatLocation {
    /// True when `other` sits directly to the right of `self` in the same row.
    pub fn is_followed_by(&self, other: &SeatLocation) -> bool {
        self.row == other.row && (self.column as u32) + 1 == other.column as u32
    }

    /// Seat label as printed on a boarding pass, e.g. `12C`.
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seat {
    pub id: u32,
    pub flight_id: u64,
    pub location: SeatLocation,
    #[serde(rename = "type")]
    pub types: Vec<SeatType>,
    #[serde(default = "default_status")]
    pub status: SeatStatus,
    #[serde(default)]
    pub exit_proximity: u32,
}

fn default_status() -> SeatStatus {
    SeatStatus::Available
}

impl Seat {
    pub fn has_type(&self, seat_type: SeatType) -> bool {
        self.types.contains(&seat_type)
    }

    pub fn has_any_type(&self, seat_types: &[SeatType]) -> bool {
        seat_types.iter().any(|t| self.has_type(*t))
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}
