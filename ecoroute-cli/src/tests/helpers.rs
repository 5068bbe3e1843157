//! Test helpers for plan CLI workspaces and stubbed route sources.

use super::*;
use crate::plan::{PlanConfig, PlanSourceBuilder};
use camino::{Utf8Path, Utf8PathBuf};
use ecoroute_core::test_support::{StaticRouteSource, sample_routes};
use ecoroute_core::{Route, RouteSource, RouteSourceError};
use std::cell::RefCell;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Plan arguments for a valid query that resolves without delay.
pub(super) fn plan_args(from: &str, to: &str) -> PlanArgs {
    PlanArgs {
        from: Some(from.to_owned()),
        to: Some(to.to_owned()),
        delay_ms: Some(0),
        ..PlanArgs::default()
    }
}

/// Serves a fixed response and records the configuration it was built with.
#[derive(Debug)]
pub(super) struct StubPlanSourceBuilder {
    response: Result<Vec<Route>, RouteSourceError>,
    seen: RefCell<Option<PlanConfig>>,
}

impl StubPlanSourceBuilder {
    pub(super) fn with_sample_routes() -> Self {
        Self {
            response: Ok(sample_routes()),
            seen: RefCell::new(None),
        }
    }

    pub(super) fn with_error(error: RouteSourceError) -> Self {
        Self {
            response: Err(error),
            seen: RefCell::new(None),
        }
    }

    pub(super) fn seen(&self) -> Option<PlanConfig> {
        self.seen.borrow().clone()
    }
}

impl PlanSourceBuilder for StubPlanSourceBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn RouteSource>, CliError> {
        self.seen.replace(Some(config.clone()));
        let source = match &self.response {
            Ok(routes) => StaticRouteSource::with_routes(routes.clone()),
            Err(error) => StaticRouteSource::with_error(error.clone()),
        };
        Ok(Box::new(source))
    }
}
