//! Plan routes for a query: validate, fetch, rank.

use thiserror::Error;

use crate::{Route, RouteQuery, RouteQueryError, RouteSource, RouteSourceError, select_top_routes};

/// Ranked routes answering a [`RouteQuery`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// The validated query.
    pub query: RouteQuery,
    /// Routes in ascending score order.
    pub routes: Vec<Route>,
}

impl RoutePlan {
    /// Return the best-ranked route travelling by `mode`, ignoring ASCII case.
    pub fn select_route(&self, mode: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.is_mode(mode))
    }
}

/// Errors returned by [`plan_routes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The query was rejected before any data was fetched.
    #[error("invalid route query: {0}")]
    InvalidQuery(#[from] RouteQueryError),
    /// The route source failed.
    #[error("failed to fetch routes: {0}")]
    Source(#[from] RouteSourceError),
}

/// Validate `query`, fetch candidates from `source` and keep the best `count`.
///
/// The source is never consulted for an invalid query.
///
/// # Examples
/// ```
/// use ecoroute_core::test_support::StaticRouteSource;
/// use ecoroute_core::{RouteQuery, plan_routes};
///
/// let source = StaticRouteSource::with_sample_routes();
/// let query = RouteQuery::new("Ferry Building", "Pier 39");
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let plan = runtime.block_on(plan_routes(&source, query, 3))?;
/// assert_eq!(plan.routes.len(), 3);
/// assert_eq!(plan.routes[0].mode, "bicycling");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub async fn plan_routes<S>(
    source: &S,
    query: RouteQuery,
    count: usize,
) -> Result<RoutePlan, PlanError>
where
    S: RouteSource + ?Sized,
{
    query.validate()?;
    let candidates = source.fetch_routes().await?;
    log::debug!(
        "ranking {} candidate routes from {:?} to {:?}",
        candidates.len(),
        query.from,
        query.to
    );
    let routes = select_top_routes(Some(candidates.as_slice()), count);
    Ok(RoutePlan { query, routes })
}
