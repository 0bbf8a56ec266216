//! HTTP API surface: query types, response shapes, and handlers
//!
//! The three lookup endpoints answer from the shared [`TravelCatalog`];
//! each handler is a pure function of its query parameters against the
//! catalog. Success and error bodies are JSON throughout.

use std::{convert::Infallible, sync::Arc};

use axum::{
    Json, Router,
    extract::{FromRequestParts, Query, State},
    http::request::Parts,
    routing::get,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    EcoTravelError, Result, VERSION,
    catalog::TravelCatalog,
    models::{Accommodation, Activity, RouteInfo},
};

/// Query parameters for the route lookup endpoint.
///
/// Both fields are optional so that a missing parameter takes the same
/// not-found path as an unknown location instead of a validation error.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Query parameter shared by both recommendation endpoints
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub location: Option<String>,
}

/// Success body for the route lookup: `{"route": {...}}`
#[derive(Debug, Serialize)]
pub struct RouteEnvelope {
    pub route: RouteInfo,
}

/// Service identification returned at the root path
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
}

/// Query extractor that never rejects.
///
/// A query string that fails to deserialize (a duplicated key, an
/// undecodable value) degrades to the type's default with every parameter
/// unset, taking the same not-found path as any unmatched lookup.
struct LenientQuery<T>(T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(params)) => Ok(Self(params)),
            Err(rejection) => {
                debug!("Malformed query string: {rejection}");
                Ok(Self(T::default()))
            }
        }
    }
}

/// Build the API router over a shared catalog.
///
/// The `optimize_route` path keeps its historical name for interface
/// compatibility; the handler behind it performs an exact lookup.
pub fn router(catalog: Arc<TravelCatalog>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/optimize_route", get(route_lookup))
        .route("/recommend_accommodation", get(recommend_accommodation))
        .route("/recommend_activity", get(recommend_activity))
        .with_state(catalog)
}

async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME"),
        version: VERSION,
    })
}

async fn route_lookup(
    State(catalog): State<Arc<TravelCatalog>>,
    LenientQuery(params): LenientQuery<RouteQuery>,
) -> Result<Json<RouteEnvelope>> {
    let start = params.start.unwrap_or_default();
    let end = params.end.unwrap_or_default();
    debug!("Route lookup from {start:?} to {end:?}");

    catalog
        .find_route(&start, &end)
        .map(|route| {
            Json(RouteEnvelope {
                route: route.clone(),
            })
        })
        .ok_or(EcoTravelError::RouteNotFound)
}

async fn recommend_accommodation(
    State(catalog): State<Arc<TravelCatalog>>,
    LenientQuery(params): LenientQuery<LocationQuery>,
) -> Result<Json<Vec<Accommodation>>> {
    let location = params.location.unwrap_or_default();
    debug!("Accommodation recommendations for {location:?}");

    let matches: Vec<Accommodation> = catalog
        .accommodations_in(&location)
        .into_iter()
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(EcoTravelError::AccommodationsNotFound);
    }

    Ok(Json(matches))
}

async fn recommend_activity(
    State(catalog): State<Arc<TravelCatalog>>,
    LenientQuery(params): LenientQuery<LocationQuery>,
) -> Result<Json<Vec<Activity>>> {
    let location = params.location.unwrap_or_default();
    debug!("Activity recommendations for {location:?}");

    let matches: Vec<Activity> = catalog
        .eco_activities_in(&location)
        .into_iter()
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(EcoTravelError::ActivitiesNotFound);
    }

    Ok(Json(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde_json::json;

    fn catalog() -> Arc<TravelCatalog> {
        Arc::new(TravelCatalog::demo())
    }

    #[tokio::test]
    async fn test_route_lookup_hit() {
        let response = route_lookup(
            State(catalog()),
            LenientQuery(RouteQuery {
                start: Some("City A".to_string()),
                end: Some("City B".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.route.distance, 100);
        assert_eq!(response.0.route.eco_score, 5);
    }

    #[tokio::test]
    async fn test_route_lookup_miss_is_route_not_found() {
        let result = route_lookup(
            State(catalog()),
            LenientQuery(RouteQuery {
                start: Some("City B".to_string()),
                end: Some("City A".to_string()),
            }),
        )
        .await;

        assert!(matches!(result, Err(EcoTravelError::RouteNotFound)));
    }

    #[tokio::test]
    async fn test_missing_parameters_behave_like_misses() {
        let result = route_lookup(
            State(catalog()),
            LenientQuery(RouteQuery {
                start: None,
                end: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(EcoTravelError::RouteNotFound)));

        let result = recommend_accommodation(
            State(catalog()),
            LenientQuery(LocationQuery { location: None }),
        )
        .await;
        assert!(matches!(
            result,
            Err(EcoTravelError::AccommodationsNotFound)
        ));

        let result = recommend_activity(
            State(catalog()),
            LenientQuery(LocationQuery { location: None }),
        )
        .await;
        assert!(matches!(result, Err(EcoTravelError::ActivitiesNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_keys_degrade_to_unset_parameters() {
        let (mut parts, _) = Request::builder()
            .uri("/optimize_route?start=City%20A&start=City%20A&end=City%20B")
            .body(())
            .unwrap()
            .into_parts();

        let LenientQuery(params) = LenientQuery::<RouteQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(params.start, None);
        assert_eq!(params.end, None);
    }

    #[test]
    fn test_route_envelope_wire_shape() {
        let envelope = RouteEnvelope {
            route: RouteInfo {
                distance: 100,
                eco_score: 5,
            },
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"route": {"distance": 100, "eco_score": 5}}));
    }
}
