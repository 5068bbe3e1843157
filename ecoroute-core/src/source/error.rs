use thiserror::Error;

use crate::RouteError;

/// Errors from [`crate::source::RouteSource::fetch_routes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteSourceError {
    /// The route data could not be obtained at all.
    #[error("route data is unavailable: {message}")]
    Unavailable {
        /// Human-readable cause.
        message: String,
    },
    /// The payload was not a JSON array of route records.
    #[error("route data has an invalid format: {message}")]
    InvalidFormat {
        /// Decoder message describing the mismatch.
        message: String,
    },
    /// A decoded record broke the route data contract.
    #[error("route at index {index} is invalid: {source}")]
    InvalidRoute {
        /// Zero-based position of the record in the payload.
        index: usize,
        /// Validation failure for that record.
        #[source]
        source: RouteError,
    },
}
