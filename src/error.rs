//! Error types and handling for the ecotravel service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the ecotravel service.
///
/// The not-found variants carry the fixed messages the API contract
/// promises; their `Display` output is the wire message.
#[derive(Error, Debug)]
pub enum EcoTravelError {
    /// No route stored for the requested (start, end) pair
    #[error("Route not found")]
    RouteNotFound,

    /// No accommodation records at the requested location
    #[error("No accommodations found")]
    AccommodationsNotFound,

    /// No eco-friendly activity records at the requested location
    #[error("No activities found")]
    ActivitiesNotFound,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl EcoTravelError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error surfaces as
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RouteNotFound | Self::AccommodationsNotFound | Self::ActivitiesNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Config { .. } | Self::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body for error responses: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for EcoTravelError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
