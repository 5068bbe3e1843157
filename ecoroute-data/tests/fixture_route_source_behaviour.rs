//! Behavioural tests for `FixtureRouteSource`.

use std::cell::RefCell;
use std::time::Duration;

use camino::Utf8PathBuf;
use ecoroute_core::{Route, RouteError, RouteSource, RouteSourceError};
use ecoroute_data::test_support::block_on_for_tests;
use ecoroute_data::{FixturePayload, FixtureRouteSource, FixtureRouteSourceConfig};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

#[derive(Debug)]
struct SourceWorld {
    tmp: TempDir,
    source: RefCell<Option<FixtureRouteSource>>,
    outcome: RefCell<Option<Result<Vec<Route>, RouteSourceError>>>,
}

impl SourceWorld {
    fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("tempdir"),
            source: RefCell::new(None),
            outcome: RefCell::new(None),
        }
    }

    fn serve(&self, payload: FixturePayload) {
        let config = FixtureRouteSourceConfig::new(payload).with_delay(Duration::ZERO);
        self.source
            .replace(Some(FixtureRouteSource::with_config(config)));
    }

    fn error(&self) -> RouteSourceError {
        match self.outcome.borrow().as_ref() {
            Some(Err(err)) => err.clone(),
            other => panic!("expected a fetch error, found {other:?}"),
        }
    }
}

#[fixture]
fn world() -> SourceWorld {
    SourceWorld::new()
}

#[given("the bundled fixture source without delay")]
fn given_bundled(world: &SourceWorld) {
    world.serve(FixturePayload::Embedded);
}

#[given("a fixture source serving a JSON object")]
fn given_object_payload(world: &SourceWorld) {
    world.serve(FixturePayload::Inline(
        r#"{"mode":"walking","distance_km":5,"time_min":60,"co2_g":0,"score":60}"#.to_owned(),
    ));
}

#[given("a fixture source serving a route with negative emissions")]
fn given_negative_emissions(world: &SourceWorld) {
    world.serve(FixturePayload::Inline(
        r#"[{"mode":"driving","distance_km":5,"time_min":10,"co2_g":-1,"score":110}]"#.to_owned(),
    ));
}

#[given("a fixture source reading a file that does not exist")]
fn given_missing_file(world: &SourceWorld) {
    let path = Utf8PathBuf::from_path_buf(world.tmp.path().join("routes.json"))
        .expect("utf-8 temp path");
    world.serve(FixturePayload::File(path));
}

#[when("I fetch routes")]
fn when_fetch(world: &SourceWorld) {
    let outcome = {
        let source = world.source.borrow();
        let source = source.as_ref().expect("source should be configured");
        block_on_for_tests(source.fetch_routes())
    };
    world.outcome.replace(Some(outcome));
}

#[then("{count} routes are returned")]
fn then_count(world: &SourceWorld, count: usize) {
    let outcome = world.outcome.borrow();
    let routes = match outcome.as_ref() {
        Some(Ok(routes)) => routes,
        other => panic!("expected routes, found {other:?}"),
    };
    assert_eq!(routes.len(), count);
}

#[then("every route carries a mode, distance, time, emissions and score")]
fn then_complete_records(world: &SourceWorld) {
    let outcome = world.outcome.borrow();
    let Some(Ok(routes)) = outcome.as_ref() else {
        panic!("expected routes, found {outcome:?}");
    };
    for route in routes {
        assert!(!route.mode.is_empty(), "mode missing in {route:?}");
        assert!(route.validate().is_ok(), "invalid fixture route {route:?}");
    }
}

#[then("the fetch fails with an invalid format")]
fn then_invalid_format(world: &SourceWorld) {
    let err = world.error();
    assert!(
        matches!(err, RouteSourceError::InvalidFormat { .. }),
        "unexpected error {err:?}"
    );
}

#[then("the fetch fails because route {index} is invalid")]
fn then_invalid_route(world: &SourceWorld, index: usize) {
    assert_eq!(
        world.error(),
        RouteSourceError::InvalidRoute {
            index,
            source: RouteError::NegativeOrNonFinite { field: "co2_g" },
        }
    );
}

#[then("the fetch fails because the data is unavailable")]
fn then_unavailable(world: &SourceWorld) {
    let err = world.error();
    assert!(
        matches!(err, RouteSourceError::Unavailable { .. }),
        "unexpected error {err:?}"
    );
}

#[scenario(path = "tests/features/fixture_route_source.feature", index = 0)]
fn bundled_routes(world: SourceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/fixture_route_source.feature", index = 1)]
fn object_payload(world: SourceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/fixture_route_source.feature", index = 2)]
fn negative_emissions(world: SourceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/fixture_route_source.feature", index = 3)]
fn missing_file(world: SourceWorld) {
    let _ = world;
}
