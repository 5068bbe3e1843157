//! Fixture-backed route source with simulated latency.
//!
//! [`FixtureRouteSource`] stands in for a routing backend: it waits for a
//! configurable delay, then resolves with routes decoded from a JSON payload.
//! The payload is the bundled `routes.json` asset unless a file or inline
//! document is configured.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use ecoroute_core::RouteSource;
//! use ecoroute_data::{FixtureRouteSource, FixtureRouteSourceConfig};
//!
//! let config = FixtureRouteSourceConfig::default().with_delay(Duration::from_millis(50));
//! let source = FixtureRouteSource::with_config(config);
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
//! let routes = runtime.block_on(source.fetch_routes())?;
//! println!("{} candidate routes", routes.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decode;
mod source;

pub use decode::parse_routes;
pub use source::{DEFAULT_DELAY, FixturePayload, FixtureRouteSource, FixtureRouteSourceConfig};
