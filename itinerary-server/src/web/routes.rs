//! HTTP route handlers.

use std::any::Any;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::{InvalidTicket, ItineraryError, Ticket};
use crate::itinerary::reconstruct_itinerary;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;

    let routes = Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/api/v1/liveness", get(liveness).fallback(method_not_allowed))
        .route("/api/v1/readiness", get(readiness).fallback(method_not_allowed))
        .route(
            "/api/v1/dispatcher/itinerary",
            post(reconstruct).fallback(method_not_allowed),
        )
        .fallback(not_found);

    with_middleware(routes, body_limit).with_state(state)
}

/// Body limit, panic recovery and request tracing.
fn with_middleware(routes: Router<AppState>, body_limit: usize) -> Router<AppState> {
    routes
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn liveness() -> Json<SuccessResponse<Empty>> {
    Json(SuccessResponse::with_message(
        "All services are up and running",
        Empty {},
    ))
}

async fn readiness() -> Json<SuccessResponse<Empty>> {
    Json(SuccessResponse::with_message(
        "All services are up and ready to process requests",
        Empty {},
    ))
}

/// Reconstruct an itinerary from a list of tickets.
async fn reconstruct(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SuccessResponse<ItineraryData>>, AppError> {
    let body = body?;

    // Parse JSON manually so we can log the body on failure
    let req: ReconstructItineraryRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "rejected request body");
        AppError::BadRequest {
            message: format!("invalid JSON: {e}"),
            code: "INVALID_JSON",
        }
    })?;

    let max_tickets = state.config.max_tickets;
    if req.tickets.len() > max_tickets {
        return Err(AppError::BadRequest {
            message: format!(
                "too many tickets: {} exceeds the limit of {max_tickets}",
                req.tickets.len()
            ),
            code: "TOO_MANY_TICKETS",
        });
    }

    let tickets = req
        .tickets
        .into_iter()
        .map(Ticket::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let itinerary = reconstruct_itinerary(&tickets).inspect_err(|e| {
        debug!(error = %e, tickets = ?tickets, "itinerary rejected");
    })?;

    Ok(Json(SuccessResponse::data(ItineraryData {
        linear_path: itinerary.into_stops(),
    })))
}

/// Fallback for a known path hit with the wrong method.
async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        message: format!("method {method} not allowed on {}", uri.path()),
    }
}

/// Fallback for paths with no route.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("no route for {}", uri.path()),
    }
}

/// Turn a handler panic into a 500 response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!(panic = detail, "request handler panicked");

    AppError::Internal {
        message: "internal server error".to_string(),
    }
    .into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
        code: &'static str,
    },
    NotFound {
        message: String,
    },
    MethodNotAllowed {
        message: String,
    },
    PayloadTooLarge {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
            code: e.code(),
        }
    }
}

impl From<InvalidTicket> for AppError {
    fn from(e: InvalidTicket) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
            code: "INVALID_TICKET",
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(e: BytesRejection) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge {
                message: e.body_text(),
            }
        } else {
            AppError::BadRequest {
                message: e.body_text(),
                code: "INVALID_BODY",
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::BadRequest { message, code } => (StatusCode::BAD_REQUEST, message, code),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, "NOT_FOUND"),
            AppError::MethodNotAllowed { message } => {
                (StatusCode::METHOD_NOT_ALLOWED, message, "METHOD_NOT_ALLOWED")
            }
            AppError::PayloadTooLarge { message } => {
                (StatusCode::PAYLOAD_TOO_LARGE, message, "PAYLOAD_TOO_LARGE")
            }
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
            }
        };

        if status.is_server_error() {
            error!(%status, code, %message, "request failed");
        } else {
            warn!(%status, code, %message, "request rejected");
        }

        let body = Json(ErrorResponse { err: message, code });
        (status, body).into_response()
    }
}
