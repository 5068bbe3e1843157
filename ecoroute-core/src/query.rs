//! Origin/destination requests.

use thiserror::Error;

/// A request for routes between two addresses.
///
/// Addresses are free text; no geocoding happens in this crate.
///
/// # Examples
/// ```
/// use ecoroute_core::{RouteQuery, RouteQueryError};
///
/// let query = RouteQuery::new(" 1 Market St ", "Golden Gate Park");
/// assert_eq!(query.from, "1 Market St");
/// assert!(query.validate().is_ok());
///
/// let blank = RouteQuery::new("", "Golden Gate Park");
/// assert_eq!(blank.validate(), Err(RouteQueryError::MissingOrigin));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteQuery {
    /// Origin address.
    pub from: String,
    /// Destination address.
    pub to: String,
}

/// Errors returned by [`RouteQuery::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteQueryError {
    /// The origin address was blank.
    #[error("origin address is required")]
    MissingOrigin,
    /// The destination address was blank.
    #[error("destination address is required")]
    MissingDestination,
}

impl RouteQuery {
    /// Build a query from trimmed addresses without validating them.
    pub fn new(from: impl AsRef<str>, to: impl AsRef<str>) -> Self {
        Self {
            from: from.as_ref().trim().to_owned(),
            to: to.as_ref().trim().to_owned(),
        }
    }

    /// Ensure both addresses contain something other than whitespace.
    ///
    /// The origin is checked first.
    pub fn validate(&self) -> Result<(), RouteQueryError> {
        if self.from.trim().is_empty() {
            return Err(RouteQueryError::MissingOrigin);
        }
        if self.to.trim().is_empty() {
            return Err(RouteQueryError::MissingDestination);
        }
        Ok(())
    }
}
