//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Request to reconstruct an itinerary.
#[derive(Debug, Default, Deserialize)]
pub struct ReconstructItineraryRequest {
    /// Tickets as `[source, destination]` pairs, in any order.
    /// A missing field is the same as an empty list.
    #[serde(default)]
    pub tickets: Vec<Vec<String>>,
}

/// Reconstructed itinerary payload.
#[derive(Debug, Serialize)]
pub struct ItineraryData {
    /// Stops in travel order
    pub linear_path: Vec<String>,
}

/// Empty JSON object payload.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

/// Envelope for successful responses.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    /// Human-readable status, omitted when there is nothing to say
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Response payload
    pub data: T,
}

impl<T> SuccessResponse<T> {
    /// Wrap a payload without a message.
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }

    /// Wrap a payload with a status message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub err: String,

    /// Machine-readable error code
    pub code: &'static str,
}
