//! Data access for the ecoroute engine.
//!
//! Responsibilities:
//! - Provide [`RouteSource`](ecoroute_core::RouteSource) adapters.
//! - Decode route payloads and enforce the route data contract.
//!
//! Boundaries:
//! - Do not encode ranking rules (they live in `ecoroute-core`).
//! - Keep blocking I/O off async executors.
//!
//! Invariants:
//! - Sources are `Send + Sync` and hold no mutable state.

#![forbid(unsafe_code)]

pub mod fixture;

#[doc(hidden)]
pub mod test_support;

pub use fixture::{
    DEFAULT_DELAY, FixturePayload, FixtureRouteSource, FixtureRouteSourceConfig, parse_routes,
};
