//! Decode JSON route payloads.

use ecoroute_core::{Route, RouteSourceError};
use serde_json::Value;

/// Decode a JSON array of route records.
///
/// Every record must carry `mode`, `distance_km`, `time_min`, `co2_g` and
/// `score`, and must pass [`Route::validate`]. An empty array is valid.
///
/// # Errors
///
/// Returns [`RouteSourceError::InvalidFormat`] when the payload is not JSON,
/// is not an array, or contains a record that does not decode, and
/// [`RouteSourceError::InvalidRoute`] for the first record that breaks the
/// route data contract.
///
/// # Examples
/// ```
/// use ecoroute_data::parse_routes;
///
/// let routes = parse_routes(
///     r#"[{"mode":"transit","distance_km":5,"time_min":20,"co2_g":50,"score":30}]"#,
/// )?;
/// assert_eq!(routes[0].mode, "transit");
/// assert!(parse_routes(r#"{"mode":"transit"}"#).is_err());
/// # Ok::<(), ecoroute_core::RouteSourceError>(())
/// ```
pub fn parse_routes(payload: &str) -> Result<Vec<Route>, RouteSourceError> {
    let document: Value =
        serde_json::from_str(payload).map_err(|err| RouteSourceError::InvalidFormat {
            message: err.to_string(),
        })?;
    let Value::Array(records) = document else {
        return Err(RouteSourceError::InvalidFormat {
            message: "expected a JSON array of routes".to_owned(),
        });
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> Result<Route, RouteSourceError> {
            let route: Route =
                serde_json::from_value(record).map_err(|err| RouteSourceError::InvalidFormat {
                    message: format!("record {index}: {err}"),
                })?;
            route
                .validate()
                .map_err(|source| RouteSourceError::InvalidRoute { index, source })?;
            Ok(route)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoroute_core::RouteError;
    use rstest::rstest;

    #[rstest]
    fn decodes_records_in_order() {
        let payload = r#"[
            {"mode":"walking","distance_km":5,"time_min":60,"co2_g":0,"score":60},
            {"mode":"driving","distance_km":5.5,"time_min":10,"co2_g":1000,"score":110}
        ]"#;
        let routes = parse_routes(payload).expect("payload should decode");
        let modes: Vec<_> = routes.iter().map(|r| r.mode.as_str()).collect();
        assert_eq!(modes, ["walking", "driving"]);
        assert_eq!(routes.get(1).map(|r| r.distance_km), Some(5.5));
    }

    #[rstest]
    fn accepts_empty_array() {
        assert_eq!(parse_routes("[]"), Ok(Vec::new()));
    }

    #[rstest]
    #[case::object(r#"{"routes":[]}"#)]
    #[case::string(r#""walking""#)]
    #[case::null("null")]
    #[case::malformed("[{")]
    #[case::missing_field(r#"[{"mode":"walking","distance_km":5,"time_min":60,"co2_g":0}]"#)]
    #[case::wrong_type(r#"[{"mode":"walking","distance_km":"far","time_min":60,"co2_g":0,"score":1}]"#)]
    fn rejects_malformed_payloads(#[case] payload: &str) {
        let err = parse_routes(payload).expect_err("payload should be rejected");
        assert!(
            matches!(err, RouteSourceError::InvalidFormat { .. }),
            "unexpected error {err:?}"
        );
    }

    #[rstest]
    fn reports_index_of_invalid_route() {
        let payload = r#"[
            {"mode":"walking","distance_km":5,"time_min":60,"co2_g":0,"score":60},
            {"mode":"driving","distance_km":5,"time_min":-10,"co2_g":1000,"score":110}
        ]"#;
        let err = parse_routes(payload).expect_err("negative time should be rejected");
        assert_eq!(
            err,
            RouteSourceError::InvalidRoute {
                index: 1,
                source: RouteError::NegativeOrNonFinite { field: "time_min" },
            }
        );
    }
}
