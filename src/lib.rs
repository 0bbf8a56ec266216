//! `EcoTravel` - Eco-friendly travel guide web service
//!
//! This library provides route lookups between destinations and
//! eco-conscious accommodation and activity recommendations, served
//! over a small JSON HTTP API.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use catalog::TravelCatalog;
pub use config::EcoTravelConfig;
pub use error::EcoTravelError;
pub use models::{Accommodation, Activity, RouteInfo, RoutePair};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EcoTravelError>;
