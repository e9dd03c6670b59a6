//! Itinerary reconstruction from unordered tickets.
//!
//! This module answers: "given every ticket of a trip, in any order, what
//! was the trip?" It is a degree-constrained Hierholzer walk:
//!
//! 1. reject duplicate tickets,
//! 2. build adjacency lists and degree tables,
//! 3. resolve the unique origin from degree imbalances,
//! 4. walk every edge once from the origin and reject closed loops.
//!
//! When several trails use every ticket, the one that takes the
//! lexicographically smallest next stop at each choice is returned.

mod endpoints;
mod graph;
mod validate;
mod walk;


use tracing::{debug, warn};

use crate::domain::{Itinerary, ItineraryError, Ticket};

use endpoints::{resolve_start, validate_endpoints};
use graph::build_graph;
use validate::validate_tickets;
use walk::walk;

/// Reconstruct the single itinerary that uses every ticket exactly once.
///
/// An empty ticket list yields an empty itinerary. Otherwise the result has
/// exactly `tickets.len() + 1` stops.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Ticket;
/// use itinerary_server::itinerary::reconstruct_itinerary;
///
/// let tickets = vec![Ticket::new("LAX", "DXB"), Ticket::new("JFK", "LAX")];
/// let itinerary = reconstruct_itinerary(&tickets).unwrap();
/// assert_eq!(itinerary.stops(), ["JFK", "LAX", "DXB"]);
/// ```
pub fn reconstruct_itinerary(tickets: &[Ticket]) -> Result<Itinerary, ItineraryError> {
    if tickets.is_empty() {
        return Ok(Itinerary::empty());
    }

    validate_tickets(tickets)?;

    let (mut graph, degrees) = build_graph(tickets);

    let start = resolve_start(&degrees)?;
    validate_endpoints(&[start], &degrees)?;
    debug!(tickets = tickets.len(), start, "resolved itinerary origin");

    let path = walk(start, &mut graph);
    let unvisited = graph.remaining_edges();
    if unvisited > 0 {
        // Disconnected input; only the origin's component is walked.
        warn!(start, unvisited, "tickets not reachable from the origin were skipped");
    }
    let itinerary = Itinerary::new(path.into_iter().map(str::to_owned).collect());

    if itinerary.is_closed() {
        debug!(start, "walk returned to its origin");
        return Err(ItineraryError::CycleInItinerary);
    }

    Ok(itinerary)
}
