//! Facade crate for the ecoroute route planner.
//!
//! This crate re-exports the core domain types and exposes the fixture-backed
//! route source behind a feature flag.
//!
//! ```
//! use ecoroute::{Route, select_top_routes};
//!
//! let routes = vec![
//!     Route::new("walking", 5.0, 60.0, 0.0, 60.0),
//!     Route::new("bicycling", 5.0, 25.0, 0.0, 25.0),
//! ];
//! let best = select_top_routes(Some(routes.as_slice()), 1);
//! assert_eq!(best[0].mode, "bicycling");
//! ```

#![forbid(unsafe_code)]

pub use ecoroute_core::{
    DEFAULT_TOP_ROUTES, MapPreview, Marker, MarkerColour, PlanError, Region, Route, RouteDetails,
    RouteError, RoutePlan, RouteQuery, RouteQueryError, RouteSource, RouteSourceError,
    plan_routes, select_top_routes,
};

#[cfg(feature = "fixture-source")]
pub use ecoroute_data::{
    DEFAULT_DELAY, FixturePayload, FixtureRouteSource, FixtureRouteSourceConfig, parse_routes,
};
