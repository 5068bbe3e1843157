//! `RouteSource` backed by a JSON fixture.

use std::time::Duration;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use ecoroute_core::{Route, RouteSource, RouteSourceError};

use super::decode::parse_routes;

/// Default simulated latency before a fetch resolves.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// The bundled candidate routes: walking, driving, bicycling and transit.
const EMBEDDED_ROUTES: &str = include_str!("../../assets/routes.json");

/// Where a [`FixtureRouteSource`] reads its JSON document from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FixturePayload {
    /// The `routes.json` asset compiled into the crate.
    #[default]
    Embedded,
    /// A JSON file read on every fetch.
    File(Utf8PathBuf),
    /// An in-memory JSON document.
    Inline(String),
}

/// Configuration for [`FixtureRouteSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRouteSourceConfig {
    /// JSON document to decode.
    pub payload: FixturePayload,
    /// Simulated latency applied before each fetch resolves.
    pub delay: Duration,
}

impl Default for FixtureRouteSourceConfig {
    fn default() -> Self {
        Self {
            payload: FixturePayload::default(),
            delay: DEFAULT_DELAY,
        }
    }
}

impl FixtureRouteSourceConfig {
    /// Create a configuration reading `payload` with the default delay.
    #[must_use]
    pub fn new(payload: FixturePayload) -> Self {
        Self {
            payload,
            ..Self::default()
        }
    }

    /// Set the simulated latency.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Route source that resolves with fixture data after a fixed delay.
///
/// Each fetch sleeps for the configured delay, loads the payload and decodes
/// it with [`parse_routes`]. File payloads are read on Tokio's blocking pool,
/// so the source must be polled inside a runtime with the timer enabled.
#[derive(Debug, Clone, Default)]
pub struct FixtureRouteSource {
    config: FixtureRouteSourceConfig,
}

impl FixtureRouteSource {
    /// Serve the bundled routes with the default delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve routes as described by `config`.
    #[must_use]
    pub const fn with_config(config: FixtureRouteSourceConfig) -> Self {
        Self { config }
    }

    /// Serve routes read from `path` with the default delay.
    #[must_use]
    pub fn from_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::with_config(FixtureRouteSourceConfig::new(FixturePayload::File(
            path.into(),
        )))
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FixtureRouteSourceConfig {
        &self.config
    }

    async fn load_payload(&self) -> Result<String, RouteSourceError> {
        match &self.config.payload {
            FixturePayload::Embedded => Ok(EMBEDDED_ROUTES.to_owned()),
            FixturePayload::Inline(document) => Ok(document.clone()),
            FixturePayload::File(path) => {
                let path = path.clone();
                tokio::task::spawn_blocking(move || read_payload(&path))
                    .await
                    .map_err(|err| RouteSourceError::Unavailable {
                        message: format!("route loader task failed: {err}"),
                    })?
            }
        }
    }

    async fn load_routes(&self) -> Result<Vec<Route>, RouteSourceError> {
        let payload = self.load_payload().await?;
        parse_routes(&payload)
    }
}

fn read_payload(path: &Utf8Path) -> Result<String, RouteSourceError> {
    ecoroute_fs::read_utf8_to_string(path).map_err(|err| RouteSourceError::Unavailable {
        message: format!("failed to read {path}: {err}"),
    })
}

#[async_trait]
impl RouteSource for FixtureRouteSource {
    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteSourceError> {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
        let result = self.load_routes().await;
        match &result {
            Ok(routes) => log::debug!("loaded {} fixture routes", routes.len()),
            Err(err) => log::error!("failed to load fixture routes: {err}"),
        }
        result
    }
}
