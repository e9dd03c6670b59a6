//! Domain types for itinerary reconstruction.
//!
//! Tickets are validated for shape at construction time, so the
//! reconstruction core can trust every `Ticket` it receives.

mod error;
mod itinerary;
mod ticket;

pub use error::ItineraryError;
pub use itinerary::Itinerary;
pub use ticket::{InvalidTicket, Ticket};
