//! Route model: ordered location pairs and their stored metrics

use serde::{Deserialize, Serialize};

/// Ordered (start, end) key into the route table.
///
/// The ordering is significant: (A, B) and (B, A) are distinct keys and
/// there is no reverse-direction fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePair {
    /// Departure location
    pub start: String,
    /// Arrival location
    pub end: String,
}

impl RoutePair {
    /// Create a new ordered route key
    #[must_use]
    pub fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

/// Stored metrics for a known route
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// Distance in kilometers
    pub distance: u32,
    /// Sustainability score for travelling this route; higher is greener
    pub eco_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_pair_ordering_is_significant() {
        let ab = RoutePair::new("City A".to_string(), "City B".to_string());
        let ba = RoutePair::new("City B".to_string(), "City A".to_string());
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_reversed_pair_misses_table_entry() {
        let mut routes = HashMap::new();
        routes.insert(
            RoutePair::new("City A".to_string(), "City B".to_string()),
            RouteInfo {
                distance: 100,
                eco_score: 5,
            },
        );

        let forward = RoutePair::new("City A".to_string(), "City B".to_string());
        let reversed = RoutePair::new("City B".to_string(), "City A".to_string());
        assert!(routes.contains_key(&forward));
        assert!(!routes.contains_key(&reversed));
    }
}
