//! Core domain types for the ecoroute engine.
//!
//! Responsibilities:
//! - Model candidate travel routes and the queries that request them.
//! - Rank routes by their supplied `score` (lower is better).
//! - Define the asynchronous [`RouteSource`] seam that data adapters implement.
//! - Build map preview models for a selected route.
//!
//! Boundaries:
//! - No I/O. Fetching and decoding route data lives in `ecoroute-data`.
//! - No scoring formula. `score` is opaque input.

#![forbid(unsafe_code)]

pub mod planner;
pub mod preview;
pub mod query;
pub mod ranker;
pub mod route;
pub mod source;

#[doc(hidden)]
pub mod test_support;

pub use planner::{PlanError, RoutePlan, plan_routes};
pub use preview::{MapPreview, Marker, MarkerColour, Region, RouteDetails};
pub use query::{RouteQuery, RouteQueryError};
pub use ranker::{DEFAULT_TOP_ROUTES, select_top_routes};
pub use route::{Route, RouteError};
pub use source::{RouteSource, RouteSourceError};
