//! Data models for the ecotravel service
//!
//! This module contains the wire-level domain records organized by concern:
//! - Accommodation: places to stay with a sustainability rating
//! - Activity: things to do, gated by an eco-friendly flag
//! - Route: ordered location pairs and their stored metrics

pub mod accommodation;
pub mod activity;
pub mod route;

// Re-export all public types for convenient access
pub use accommodation::Accommodation;
pub use activity::Activity;
pub use route::{RouteInfo, RoutePair};
