//! Web layer for the itinerary service.
//!
//! Provides the HTTP endpoint for itinerary reconstruction plus health probes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
