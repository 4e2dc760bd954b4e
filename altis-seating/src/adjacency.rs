use altis_core::{Recommendation, Seat, SeatPreference};
use tracing::debug;
use crate::reason::group_reason;
use crate::scoring::score_seat;

/// Groups returned when the caller's limit does not ask for more.
pub const GROUP_RESULT_CAP: usize = 3;

/// Split available seats into runs of physically adjacent seats: same row,
/// column letters strictly consecutive. Any missing or occupied seat ends a run.
pub fn adjacency_runs<'a>(available: &[&'a Seat]) -> Vec<Vec<&'a Seat>> {
    let mut sorted: Vec<&Seat> = available.to_vec();
    sorted.sort_by_key(|s| (s.location.row, s.location.column));

    let mut runs: Vec<Vec<&Seat>> = Vec::new();
    let mut current: Vec<&Seat> = Vec::new();

    for seat in sorted {
        let extends = current
            .last()
            .is_some_and(|last| last.location.is_followed_by(&seat.location));

        if !extends && !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
        current.push(seat);
    }

    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Find blocks of `passenger_count` adjacent seats and rank them by mean seat score.
///
/// Each run long enough for the party contributes its first `passenger_count`
/// seats. A party of one gets every seat as its own block.
pub fn group_adjacent_seats(available: &[&Seat], preferences: &SeatPreference) -> Vec<Recommendation> {
    let party = preferences.passenger_count.max(1) as usize;

    let blocks: Vec<Vec<&Seat>> = if party == 1 {
        adjacency_runs(available)
            .into_iter()
            .flatten()
            .map(|seat| vec![seat])
            .collect()
    } else {
        adjacency_runs(available)
            .into_iter()
            .filter(|run| run.len() >= party)
            .map(|mut run| {
                run.truncate(party);
                run
            })
            .collect()
    };

    let mut scored: Vec<(Vec<&Seat>, f64)> = blocks
        .into_iter()
        .map(|block| {
            let total: f64 = block.iter().map(|s| score_seat(s, preferences)).sum();
            let mean = total / block.len() as f64;
            (block, mean)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let cap = preferences.limit.max(GROUP_RESULT_CAP);
    debug!("Found {} candidate blocks for a party of {}, keeping {}", scored.len(), party, cap);

    scored
        .into_iter()
        .take(cap)
        .map(|(block, score)| {
            let seats: Vec<Seat> = block.into_iter().cloned().collect();
            let reason = group_reason(&seats, preferences);
            Recommendation::new(seats, score, reason)
        })
        .collect()
}
