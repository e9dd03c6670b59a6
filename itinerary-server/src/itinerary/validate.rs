//! Duplicate ticket detection.

use std::collections::HashMap;

use crate::domain::{ItineraryError, Ticket};

/// Reject any ticket whose exact (source, destination) pair was already seen.
///
/// Tickets that merely share a source, or merely share a destination, are fine.
/// Fails on the first repetition, wherever it appears in the list.
pub(crate) fn validate_tickets(tickets: &[Ticket]) -> Result<(), ItineraryError> {
    let mut seen: HashMap<(&str, &str), usize> = HashMap::with_capacity(tickets.len());

    for ticket in tickets {
        let count = seen
            .entry((ticket.source.as_str(), ticket.destination.as_str()))
            .or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(ItineraryError::MultipleSameDestination);
        }
    }

    Ok(())
}
