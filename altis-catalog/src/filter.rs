use altis_core::{Flight, FlightFilter};

/// Whether a flight satisfies every criterion set on the filter.
///
/// Destination compares case-insensitively; price and departure-time bounds
/// are inclusive.
pub fn matches_filter(filter: &FlightFilter, flight: &Flight) -> bool {
    if let Some(destination) = &filter.destination {
        if !destination.eq_ignore_ascii_case(&flight.destination) {
            return false;
        }
    }

    if let Some(date) = filter.departure_date {
        if date != flight.departure_date {
            return false;
        }
    }

    if let Some(max_price) = filter.max_price {
        if flight.price > max_price {
            return false;
        }
    }

    if let Some(earliest) = filter.min_departure_time {
        if flight.departure_time < earliest {
            return false;
        }
    }

    if let Some(latest) = filter.max_departure_time {
        if flight.departure_time > latest {
            return false;
        }
    }

    true
}
