use altis_core::SeatType;
use altis_core::SeatType::{Aisle, Middle, Window};
use std::ops::RangeInclusive;

/// Static cabin description for one aircraft family.
#[derive(Debug)]
pub struct AircraftLayout {
    pub name: &'static str,
    pub rows: RangeInclusive<u32>,
    /// Column letters in cabin order with their positional tag.
    pub columns: &'static [(char, SeatType)],
    pub exit_rows: &'static [u32],
    /// Rows `1..=extra_legroom_rows` get the extra-legroom tag.
    pub extra_legroom_rows: u32,
}

impl AircraftLayout {
    pub fn is_exit_row(&self, row: u32) -> bool {
        self.exit_rows.contains(&row)
    }

    pub fn has_extra_legroom(&self, row: u32) -> bool {
        row <= self.extra_legroom_rows || self.is_exit_row(row)
    }

    /// Rows to the closest exit row, 0 when `row` is itself an exit row.
    pub fn exit_proximity(&self, row: u32) -> u32 {
        self.exit_rows
            .iter()
            .map(|exit| row.abs_diff(*exit))
            .min()
            .unwrap_or(0)
    }

    pub fn seat_count(&self) -> usize {
        self.rows.clone().count() * self.columns.len()
    }
}

pub static NARROW_BODY: AircraftLayout = AircraftLayout {
    name: "narrow-body",
    rows: 1..=30,
    columns: &[('A', Window), ('B', Aisle), ('C', Middle), ('D', Middle), ('E', Aisle), ('F', Window)],
    exit_rows: &[1, 16],
    extra_legroom_rows: 3,
};

pub static WIDE_BODY: AircraftLayout = AircraftLayout {
    name: "wide-body",
    rows: 1..=40,
    columns: &[
        ('A', Window),
        ('B', Aisle),
        ('C', Middle),
        ('D', Middle),
        ('E', Aisle),
        ('F', Window),
        ('G', Middle),
        ('H', Aisle),
        ('J', Window),
        ('K', Aisle),
    ],
    exit_rows: &[1, 15, 30],
    extra_legroom_rows: 3,
};

pub static REGIONAL: AircraftLayout = AircraftLayout {
    name: "regional",
    rows: 1..=20,
    columns: &[('A', Window), ('B', Middle), ('C', Middle), ('D', Window)],
    exit_rows: &[1, 10],
    extra_legroom_rows: 3,
};

/// Aircraft types in fleet order; a flight flies `FLEET[flight_id % FLEET.len()]`.
pub static FLEET: [(&str, &AircraftLayout); 5] = [
    ("A320", &NARROW_BODY),
    ("B737", &NARROW_BODY),
    ("A330", &WIDE_BODY),
    ("B777", &WIDE_BODY),
    ("E190", &REGIONAL),
];

/// Aircraft type code and layout assigned to a flight.
pub fn aircraft_for(flight_id: u64) -> (&'static str, &'static AircraftLayout) {
    let index = (flight_id % FLEET.len() as u64) as usize;
    FLEET[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_assignment_is_modulo() {
        assert_eq!(aircraft_for(5).0, "A320");
        assert_eq!(aircraft_for(0).0, "A320");
        assert_eq!(aircraft_for(1).0, "B737");
        assert_eq!(aircraft_for(7).0, "A330");
        assert_eq!(aircraft_for(8).0, "B777");
        assert_eq!(aircraft_for(9).0, "E190");
        assert_eq!(aircraft_for(14).1.name, "regional");
    }

    #[test]
    fn test_exit_proximity() {
        assert_eq!(NARROW_BODY.exit_proximity(1), 0);
        assert_eq!(NARROW_BODY.exit_proximity(8), 7);
        assert_eq!(NARROW_BODY.exit_proximity(9), 7);
        assert_eq!(NARROW_BODY.exit_proximity(30), 14);
        assert_eq!(WIDE_BODY.exit_proximity(22), 7);
        assert_eq!(REGIONAL.exit_proximity(12), 2);
    }

    #[test]
    fn test_extra_legroom_rows() {
        assert!(NARROW_BODY.has_extra_legroom(3));
        assert!(!NARROW_BODY.has_extra_legroom(4));
        assert!(NARROW_BODY.has_extra_legroom(16));
        assert!(WIDE_BODY.has_extra_legroom(30));
    }

    #[test]
    fn test_seat_counts() {
        assert_eq!(NARROW_BODY.seat_count(), 180);
        assert_eq!(WIDE_BODY.seat_count(), 400);
        assert_eq!(REGIONAL.seat_count(), 80);
    }
}
