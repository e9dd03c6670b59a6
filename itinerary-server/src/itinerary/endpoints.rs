//! Start and end stop resolution from degree imbalances.
//!
//! An open trail needs exactly one stop with one more departure than
//! arrival (the origin) and exactly one stop with one more arrival than
//! departure (the terminus). Anything else is rejected as
//! `DifferentStartingPoints`, including a perfectly balanced graph.

use tracing::trace;

use super::graph::Degrees;
use crate::domain::ItineraryError;

/// Find the unique origin stop.
pub(crate) fn resolve_start<'a>(degrees: &Degrees<'a>) -> Result<&'a str, ItineraryError> {
    let mut candidates = Vec::new();

    for stop in degrees.sources() {
        match degrees.surplus(stop) {
            1 => candidates.push(stop),
            -1 | 0 => {}
            diff => {
                trace!(stop, diff, "degree imbalance too large for an open trail");
                return Err(ItineraryError::DifferentStartingPoints);
            }
        }
    }

    match candidates.as_slice() {
        [start] => Ok(*start),
        [] => {
            // Every source is balanced or a sink: a closed circuit at best.
            trace!("no stop departs more than it arrives");
            Err(ItineraryError::DifferentStartingPoints)
        }
        _ => {
            trace!(?candidates, "more than one origin candidate");
            Err(ItineraryError::DifferentStartingPoints)
        }
    }
}

/// Check the terminus side of the degree table against the resolved origins.
///
/// Every stop that receives tickets may arrive at most once more than it
/// departs, and exactly one may do so when there is a single origin.
pub(crate) fn validate_endpoints(
    start_candidates: &[&str],
    degrees: &Degrees<'_>,
) -> Result<(), ItineraryError> {
    let mut end_candidates = 0usize;

    for stop in degrees.sinks() {
        match -degrees.surplus(stop) {
            1 => end_candidates += 1,
            -1 | 0 => {}
            diff => {
                trace!(stop, diff, "arrival imbalance too large for an open trail");
                return Err(ItineraryError::DifferentStartingPoints);
            }
        }
    }

    if start_candidates.len() == 1 && end_candidates != 1 {
        trace!(end_candidates, "origin without a matching terminus");
        return Err(ItineraryError::DifferentStartingPoints);
    }

    Ok(())
}
