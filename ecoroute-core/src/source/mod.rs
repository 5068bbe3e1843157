//! Fetch candidate routes from a data source.
//!
//! The [`RouteSource`] trait abstracts the upstream collaborator that
//! eventually yields a collection of [`Route`](crate::Route) values or fails
//! with a [`RouteSourceError`]. Implementations live outside this crate; the
//! fixture-backed source in `ecoroute-data` is the reference adapter.

mod error;

use async_trait::async_trait;

use crate::Route;

pub use error::RouteSourceError;

/// Asynchronously fetch candidate routes.
///
/// Implementations must be `Send + Sync` so a single source can serve
/// concurrent requests. The returned collection is unordered; callers rank it
/// with [`select_top_routes`](crate::select_top_routes).
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use ecoroute_core::{Route, RouteSource, RouteSourceError};
///
/// struct SingleRoute;
///
/// #[async_trait]
/// impl RouteSource for SingleRoute {
///     async fn fetch_routes(&self) -> Result<Vec<Route>, RouteSourceError> {
///         Ok(vec![Route::new("walking", 1.0, 12.0, 0.0, 12.0)])
///     }
/// }
/// ```
#[async_trait]
pub trait RouteSource: Send + Sync {
    /// Resolve with every candidate route, or the reason none are available.
    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteSourceError>;
}

#[async_trait]
impl<S> RouteSource for Box<S>
where
    S: RouteSource + ?Sized,
{
    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteSourceError> {
        (**self).fetch_routes().await
    }
}
