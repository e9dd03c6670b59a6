//! Itinerary reconstruction errors.
//!
//! Every variant is a client-input fault: the tickets cannot form a
//! single open itinerary. There is no internal-failure variant.

/// Reasons a ticket list cannot be turned into an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// The same (source, destination) ticket appears more than once
    #[error("multiple same destination")]
    MultipleSameDestination,

    /// No unique origin, or degree imbalance that no open trail can satisfy
    #[error("different starting points")]
    DifferentStartingPoints,

    /// The walk ends where it started
    #[error("cycle in itinerary")]
    CycleInItinerary,
}

impl ItineraryError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ItineraryError::MultipleSameDestination => "MULTIPLE_SAME_DESTINATION",
            ItineraryError::DifferentStartingPoints => "DIFFERENT_STARTING_POINTS",
            ItineraryError::CycleInItinerary => "CYCLE_IN_ITINERARY",
        }
    }
}
