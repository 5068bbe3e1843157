//! In-memory fixtures shared by unit, behaviour and downstream tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::route::{BICYCLING, DRIVING, TRANSIT, WALKING};
use crate::{Route, RouteSource, RouteSourceError};

/// Build a route where only the mode and score matter.
///
/// The remaining measurements are fixed placeholders that satisfy
/// [`Route::validate`].
pub fn route(mode: &str, score: f64) -> Route {
    Route::new(mode, 1.0, 1.0, 1.0, score)
}

/// The four travel modes used throughout the scenarios.
///
/// Scores: walking 60, driving 110, bicycling 25, transit 30.
pub fn sample_routes() -> Vec<Route> {
    vec![
        Route::new(WALKING, 5.0, 60.0, 0.0, 60.0),
        Route::new(DRIVING, 5.0, 10.0, 1000.0, 110.0),
        Route::new(BICYCLING, 5.0, 25.0, 0.0, 25.0),
        Route::new(TRANSIT, 5.0, 20.0, 50.0, 30.0),
    ]
}

/// `RouteSource` returning a pre-configured response and counting calls.
#[derive(Debug)]
pub struct StaticRouteSource {
    response: Result<Vec<Route>, RouteSourceError>,
    calls: AtomicUsize,
}

impl StaticRouteSource {
    /// Resolve every fetch with `routes`.
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            response: Ok(routes),
            calls: AtomicUsize::new(0),
        }
    }

    /// Resolve every fetch with [`sample_routes`].
    pub fn with_sample_routes() -> Self {
        Self::with_routes(sample_routes())
    }

    /// Fail every fetch with `error`.
    pub fn with_error(error: RouteSourceError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteSource for StaticRouteSource {
    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Drive a future to completion on a throwaway current-thread runtime.
#[cfg(test)]
pub(crate) fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime should build")
        .block_on(future)
}
