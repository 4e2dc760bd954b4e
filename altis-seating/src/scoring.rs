use altis_core::{Seat, SeatPreference, SeatType};

/// Fit of a single seat against the passenger's weights.
///
/// Linear in the weights: window weight if the seat is a window seat, legroom
/// weight once if it is an exit-row or extra-legroom seat, plus the exit weight
/// scaled by `1 / (1 + exit_proximity)`.
pub fn score_seat(seat: &Seat, preferences: &SeatPreference) -> f64 {
    let mut score = 0.0;

    if seat.has_type(SeatType::Window) {
        score += preferences.window_preference;
    }

    if seat.has_any_type(&[SeatType::ExitRow, SeatType::ExtraLegroom]) {
        score += preferences.legroom_preference;
    }

    let exit_score = 1.0 / (1.0 + seat.exit_proximity as f64);
    score += exit_score * preferences.exit_proximity_preference;

    score
}

/// Score every seat and order best first. Ties keep their input order.
pub fn rank_seats<'a>(seats: &[&'a Seat], preferences: &SeatPreference) -> Vec<(&'a Seat, f64)> {
    let mut scored: Vec<(&Seat, f64)> = seats
        .iter()
        .map(|seat| (*seat, score_seat(seat, preferences)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use altis_core::{SeatLocation, SeatStatus};

    fn seat(types: Vec<SeatType>, exit_proximity: u32) -> Seat {
        Seat {
            id: 1,
            flight_id: 1,
            location: SeatLocation { row: 5, column: 'A' },
            types,
            status: SeatStatus::Available,
            exit_proximity,
        }
    }

    fn prefs(window: f64, legroom: f64, exit: f64) -> SeatPreference {
        SeatPreference {
            window_preference: window,
            legroom_preference: legroom,
            exit_proximity_preference: exit,
            ..Default::default()
        }
    }

    #[test]
    fn test_window_and_exit_terms() {
        let s = seat(vec![SeatType::Window], 3);
        let score = score_seat(&s, &prefs(0.8, 0.5, 0.4));
        assert!((score - (0.8 + 0.4 * 0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_legroom_not_double_counted() {
        let both = seat(vec![SeatType::Aisle, SeatType::ExitRow, SeatType::ExtraLegroom], 0);
        let one = seat(vec![SeatType::Aisle, SeatType::ExitRow], 0);
        let p = prefs(0.0, 0.7, 0.0);
        assert_eq!(score_seat(&both, &p), 0.7);
        assert_eq!(score_seat(&one, &p), 0.7);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let s = seat(vec![SeatType::Window, SeatType::ExitRow], 0);
        assert_eq!(score_seat(&s, &SeatPreference::default()), 0.0);
    }

    #[test]
    fn test_score_non_negative_and_monotonic() {
        let seats = [
            seat(vec![SeatType::Window], 0),
            seat(vec![SeatType::Middle, SeatType::ExtraLegroom], 2),
            seat(vec![SeatType::Aisle], 14),
        ];
        let steps = [0.0, 0.25, 0.5, 0.75, 1.0];

        for s in &seats {
            for pair in steps.windows(2) {
                let (lo, hi) = (pair[0], pair[1]);
                assert!(score_seat(s, &prefs(lo, 0.3, 0.3)) <= score_seat(s, &prefs(hi, 0.3, 0.3)));
                assert!(score_seat(s, &prefs(0.3, lo, 0.3)) <= score_seat(s, &prefs(0.3, hi, 0.3)));
                assert!(score_seat(s, &prefs(0.3, 0.3, lo)) <= score_seat(s, &prefs(0.3, 0.3, hi)));
                assert!(score_seat(s, &prefs(lo, lo, lo)) >= 0.0);
            }
        }
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let mut a = seat(vec![SeatType::Middle], 4);
        a.id = 1;
        let mut b = seat(vec![SeatType::Window], 4);
        b.id = 2;
        let mut c = seat(vec![SeatType::Middle], 4);
        c.id = 3;

        let ranked = rank_seats(&[&a, &b, &c], &prefs(0.9, 0.0, 0.1));
        let ids: Vec<u32> = ranked.iter().map(|(s, _)| s.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
