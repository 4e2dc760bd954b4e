use altis_core::{Seat, SeatPreference, SeatType};

/// A weight has to clear this before its attribute is mentioned.
const MENTION_THRESHOLD: f64 = 0.5;
/// Rows from an exit that still count as "close".
const NEAR_EXIT_ROWS: u32 = 3;

/// Explain why a single seat was picked.
pub fn seat_reason(seat: &Seat, preferences: &SeatPreference) -> String {
    let mut reasons = Vec::new();

    if seat.has_type(SeatType::Window) && preferences.window_preference > MENTION_THRESHOLD {
        reasons.push("it's a window seat");
    } else if seat.has_type(SeatType::Aisle) {
        reasons.push("it's an aisle seat with easy access");
    }

    let wants_legroom = preferences.legroom_preference > MENTION_THRESHOLD;
    if seat.has_type(SeatType::ExitRow) && wants_legroom {
        reasons.push("it's in an exit row with extra legroom");
    } else if seat.has_type(SeatType::ExtraLegroom) && wants_legroom {
        reasons.push("it has extra legroom");
    }

    if preferences.exit_proximity_preference > MENTION_THRESHOLD && seat.exit_proximity < NEAR_EXIT_ROWS {
        reasons.push("it's close to an exit");
    }

    if reasons.is_empty() {
        return "This seat is a good match for your preferences.".to_string();
    }

    format!("This seat is recommended because {}.", join_clauses(&reasons))
}

/// Explain why a block of neighbouring seats was picked. Blocks of one seat
/// read exactly like a single-seat recommendation.
pub fn group_reason(seats: &[Seat], preferences: &SeatPreference) -> String {
    let first = match seats {
        [] => return "These seats are a good match for your group.".to_string(),
        [only] => return seat_reason(only, preferences),
        [first, ..] => first,
    };

    let mut reasons = Vec::new();

    if preferences.window_preference > MENTION_THRESHOLD
        && seats.iter().any(|s| s.has_type(SeatType::Window))
    {
        reasons.push("includes a window seat");
    }

    if preferences.legroom_preference > MENTION_THRESHOLD
        && seats.iter().any(|s| s.has_any_type(&[SeatType::ExitRow, SeatType::ExtraLegroom]))
    {
        reasons.push("offers extra legroom");
    }

    if preferences.exit_proximity_preference > MENTION_THRESHOLD
        && seats.iter().any(|s| s.exit_proximity < NEAR_EXIT_ROWS)
    {
        reasons.push("close to an exit");
    }

    let lead = format!("These {} seats are adjacent in row {}", seats.len(), first.location.row);
    if reasons.is_empty() {
        return format!("{} and are a good match for your group.", lead);
    }

    format!("{}, and {}.", lead, join_clauses(&reasons))
}

/// "a", "a and b", "a, b and c"
fn join_clauses(clauses: &[&str]) -> String {
    match clauses.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
