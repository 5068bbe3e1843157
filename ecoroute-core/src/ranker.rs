//! Top-N selection of routes by score.
//!
//! [`select_top_routes`] is total: absent input, empty input and a zero count
//! all produce an empty sequence rather than an error.

use std::cmp::Ordering;

use crate::Route;

/// Number of routes shown when the caller does not ask for a specific count.
pub const DEFAULT_TOP_ROUTES: usize = 3;

/// Return the `count` lowest-scoring routes in ascending score order.
///
/// `None` is treated as an empty collection. The input is left untouched;
/// the result is a freshly allocated vector of cloned routes. The order of
/// routes with equal scores is unspecified.
///
/// # Examples
/// ```
/// use ecoroute_core::{Route, select_top_routes};
///
/// let routes = vec![
///     Route::new("walking", 5.0, 60.0, 0.0, 60.0),
///     Route::new("driving", 5.0, 10.0, 1000.0, 110.0),
///     Route::new("bicycling", 5.0, 25.0, 0.0, 25.0),
/// ];
/// let top = select_top_routes(Some(routes.as_slice()), 2);
/// let modes: Vec<_> = top.iter().map(|r| r.mode.as_str()).collect();
/// assert_eq!(modes, ["bicycling", "walking"]);
/// assert!(select_top_routes(None, 2).is_empty());
/// ```
pub fn select_top_routes(routes: Option<&[Route]>, count: usize) -> Vec<Route> {
    let Some(routes) = routes else {
        return Vec::new();
    };
    if count == 0 || routes.is_empty() {
        return Vec::new();
    }

    let mut ranked = routes.to_vec();
    if count < ranked.len() {
        // Partition so the `count` cheapest routes occupy the prefix.
        ranked.select_nth_unstable_by(count, by_score);
        ranked.truncate(count);
    }
    ranked.sort_unstable_by(by_score);
    ranked
}

/// Order two routes by ascending score.
///
/// NaN scores order after every other score so a malformed record can never
/// displace a valid one.
pub fn by_score(lhs: &Route, rhs: &Route) -> Ordering {
    match (lhs.score.is_nan(), rhs.score.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.score.total_cmp(&rhs.score),
    }
}
