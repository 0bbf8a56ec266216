//! In-memory travel catalog
//!
//! Holds the three static tables the service answers from: accommodations,
//! activities, and known routes. The catalog is built once at startup and
//! never written to afterwards.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Accommodation, Activity, RouteInfo, RoutePair};

/// Process-lifetime catalog of travel records.
///
/// Stands in for a real data source; swapping one in later means replacing
/// [`TravelCatalog::demo`] only.
#[derive(Debug)]
pub struct TravelCatalog {
    accommodations: Vec<Accommodation>,
    activities: Vec<Activity>,
    routes: HashMap<RoutePair, RouteInfo>,
}

impl TravelCatalog {
    /// Catalog seeded with the built-in demonstration records
    #[must_use]
    pub fn demo() -> Self {
        let accommodations = vec![
            Accommodation::new("Green Hotel".to_string(), "City A".to_string(), 4.5),
            Accommodation::new("Eco Lodge".to_string(), "City B".to_string(), 4.7),
        ];

        // The non-eco record never surfaces through the API; it exists so
        // the eco filter has something to reject.
        let activities = vec![
            Activity::new("Nature Hike".to_string(), "City A".to_string(), true),
            Activity::new("River Cleanup".to_string(), "City B".to_string(), true),
            Activity::new("Speedboat Tour".to_string(), "City B".to_string(), false),
        ];

        let routes = HashMap::from([
            (
                RoutePair::new("City A".to_string(), "City B".to_string()),
                RouteInfo {
                    distance: 100,
                    eco_score: 5,
                },
            ),
            (
                RoutePair::new("City A".to_string(), "City C".to_string()),
                RouteInfo {
                    distance: 200,
                    eco_score: 3,
                },
            ),
        ]);

        Self {
            accommodations,
            activities,
            routes,
        }
    }

    /// Exact ordered-pair lookup in the route table.
    ///
    /// (A, B) and (B, A) are distinct keys; unknown pairs return `None`.
    #[must_use]
    pub fn find_route(&self, start: &str, end: &str) -> Option<&RouteInfo> {
        let pair = RoutePair::new(start.to_string(), end.to_string());
        let route = self.routes.get(&pair);
        if route.is_none() {
            debug!("No route between {start:?} and {end:?}");
        }
        route
    }

    /// All accommodations whose location matches exactly
    #[must_use]
    pub fn accommodations_in(&self, location: &str) -> Vec<&Accommodation> {
        self.accommodations
            .iter()
            .filter(|accommodation| accommodation.location == location)
            .collect()
    }

    /// Eco-friendly activities whose location matches exactly.
    ///
    /// Records without the eco flag are never returned.
    #[must_use]
    pub fn eco_activities_in(&self, location: &str) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.location == location && activity.eco_friendly)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("City A", "City B", Some((100, 5)))]
    #[case("City A", "City C", Some((200, 3)))]
    #[case("City B", "City A", None)]
    #[case("City C", "City A", None)]
    #[case("City X", "City Y", None)]
    #[case("", "", None)]
    fn test_route_lookup_is_exact(
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: Option<(u32, u32)>,
    ) {
        let catalog = TravelCatalog::demo();
        let found = catalog
            .find_route(start, end)
            .map(|route| (route.distance, route.eco_score));
        assert_eq!(found, expected);
    }

    #[test]
    fn test_accommodations_filtered_by_location() {
        let catalog = TravelCatalog::demo();

        let matches = catalog.accommodations_in("City A");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Green Hotel");

        assert!(catalog.accommodations_in("City C").is_empty());
        assert!(catalog.accommodations_in("").is_empty());
    }

    #[test]
    fn test_activities_require_eco_flag() {
        let catalog = TravelCatalog::demo();

        let matches = catalog.eco_activities_in("City B");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "River Cleanup");
    }

    #[test]
    fn test_non_eco_activity_excluded_even_when_location_matches() {
        let catalog = TravelCatalog::demo();

        let names: Vec<&str> = catalog
            .eco_activities_in("City B")
            .iter()
            .map(|activity| activity.name.as_str())
            .collect();
        assert!(!names.contains(&"Speedboat Tour"));
    }
}
