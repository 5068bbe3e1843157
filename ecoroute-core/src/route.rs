//! Candidate travel routes.
//!
//! A [`Route`] describes one way of travelling between two addresses. The
//! `score` field arrives with the data and is the sole ranking criterion.

use thiserror::Error;

/// Mode identifier for walking routes.
pub const WALKING: &str = "walking";
/// Mode identifier for driving routes.
pub const DRIVING: &str = "driving";
/// Mode identifier for bicycling routes.
pub const BICYCLING: &str = "bicycling";
/// Mode identifier for public transit routes.
pub const TRANSIT: &str = "transit";

/// One candidate travel option.
///
/// Routes are plain values: ranking clones them into a fresh sequence and
/// never mutates the originals.
///
/// # Examples
/// ```
/// use ecoroute_core::Route;
///
/// let route = Route::new("bicycling", 5.0, 25.0, 0.0, 25.0);
/// assert_eq!(route.mode, "bicycling");
/// assert!(route.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Travel mode identifier, e.g. `"walking"`.
    pub mode: String,
    /// Route length in kilometres.
    pub distance_km: f64,
    /// Travel time in minutes.
    pub time_min: f64,
    /// Estimated emissions in grams of CO₂.
    pub co2_g: f64,
    /// Composite cost used for ranking. Lower is better.
    pub score: f64,
}

/// Errors returned by [`Route::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The mode identifier was blank.
    #[error("route mode must not be empty")]
    EmptyMode,
    /// A measurement was negative, NaN or infinite.
    #[error("route {field} must be a finite, non-negative number")]
    NegativeOrNonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The score was NaN or infinite.
    #[error("route score must be a finite number")]
    NonFiniteScore,
}

impl Route {
    /// Construct a route from its fields.
    pub fn new(
        mode: impl Into<String>,
        distance_km: f64,
        time_min: f64,
        co2_g: f64,
        score: f64,
    ) -> Self {
        Self {
            mode: mode.into(),
            distance_km,
            time_min,
            co2_g,
            score,
        }
    }

    /// Check the route against the data contract.
    ///
    /// Reports the first violation in field order: mode, distance, time,
    /// emissions, then score.
    ///
    /// # Examples
    /// ```
    /// use ecoroute_core::{Route, RouteError};
    ///
    /// let route = Route::new("walking", -1.0, 60.0, 0.0, 60.0);
    /// assert_eq!(
    ///     route.validate(),
    ///     Err(RouteError::NegativeOrNonFinite { field: "distance_km" })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.mode.trim().is_empty() {
            return Err(RouteError::EmptyMode);
        }
        let measurements = [
            ("distance_km", self.distance_km),
            ("time_min", self.time_min),
            ("co2_g", self.co2_g),
        ];
        if let Some((field, _)) = measurements
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(RouteError::NegativeOrNonFinite { field });
        }
        if !self.score.is_finite() {
            return Err(RouteError::NonFiniteScore);
        }
        Ok(())
    }

    /// Return the mode upper-cased for headings.
    pub fn mode_label(&self) -> String {
        self.mode.to_uppercase()
    }

    /// Whether this route travels by `mode`, ignoring ASCII case.
    pub fn is_mode(&self, mode: &str) -> bool {
        self.mode.eq_ignore_ascii_case(mode.trim())
    }
}
