//! Plan command implementation for the ecoroute CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ecoroute_core::{
    DEFAULT_TOP_ROUTES, MapPreview, RouteDetails, RoutePlan, RouteQuery, RouteSource, plan_routes,
};
use ecoroute_data::{DEFAULT_DELAY, FixturePayload, FixtureRouteSource, FixtureRouteSourceConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_COUNT, ARG_PLAN_DELAY_MS, ARG_PLAN_FORMAT, ARG_PLAN_FROM, ARG_PLAN_PREVIEW,
    ARG_PLAN_ROUTES_FILE, ARG_PLAN_TO, CliError, ENV_PLAN_FROM, ENV_PLAN_TO,
};

/// Encoding used for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// A human-readable listing.
    Text,
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Fetch candidate routes between two addresses and list the \
                 best-scoring ones, lowest score first. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Rank candidate routes between two addresses"
)]
#[ortho_config(prefix = "ECOROUTE")]
pub(crate) struct PlanArgs {
    /// Origin address.
    #[arg(long = ARG_PLAN_FROM, value_name = "address")]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Destination address.
    #[arg(long = ARG_PLAN_TO, value_name = "address")]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Number of routes to keep (defaults to 3).
    #[arg(long = ARG_PLAN_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// JSON file of candidate routes replacing the bundled fixture.
    #[arg(long = ARG_PLAN_ROUTES_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) routes_file: Option<Utf8PathBuf>,
    /// Simulated source latency in milliseconds (defaults to 500).
    #[arg(long = ARG_PLAN_DELAY_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) delay_ms: Option<u64>,
    /// Print the map preview for the ranked route with this mode.
    #[arg(long = ARG_PLAN_PREVIEW, value_name = "mode")]
    #[serde(default)]
    pub(crate) preview: Option<String>,
    /// Output encoding.
    #[arg(long = ARG_PLAN_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Trimmed origin and destination.
    pub(crate) query: RouteQuery,
    /// Number of routes to keep.
    pub(crate) count: usize,
    /// Optional replacement for the bundled routes.
    pub(crate) routes_file: Option<Utf8PathBuf>,
    /// Simulated source latency.
    pub(crate) delay: Duration,
    /// Mode to preview instead of listing the plan.
    pub(crate) preview: Option<String>,
    /// Output encoding.
    pub(crate) format: OutputFormat,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.routes_file {
            Some(path) => Self::require_existing(path, ARG_PLAN_ROUTES_FILE),
            None => Ok(()),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match ecoroute_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_FROM,
            env: ENV_PLAN_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_TO,
            env: ENV_PLAN_TO,
        })?;
        let delay = args.delay_ms.map_or(DEFAULT_DELAY, Duration::from_millis);

        Ok(Self {
            query: RouteQuery::new(from, to),
            count: args.count.unwrap_or(DEFAULT_TOP_ROUTES),
            routes_file: args.routes_file,
            delay,
            preview: args.preview,
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Builds the route source for the current plan invocation.
pub(super) trait PlanSourceBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn RouteSource>, CliError>;
}

pub(super) struct DefaultPlanSourceBuilder;

impl PlanSourceBuilder for DefaultPlanSourceBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn RouteSource>, CliError> {
        let payload = config
            .routes_file
            .clone()
            .map_or(FixturePayload::Embedded, FixturePayload::File);
        let source_config = FixtureRouteSourceConfig::new(payload).with_delay(config.delay);
        Ok(Box::new(FixtureRouteSource::with_config(source_config)))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultPlanSourceBuilder;
    run_plan_with(args, &builder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlanSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let source = builder.build(&config)?;
    let plan = execute_plan(&config, source.as_ref())?;
    let payload = render_output(&plan, &config)?;
    write_output(writer, &payload)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(config: &PlanConfig, source: &dyn RouteSource) -> Result<RoutePlan, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::StartRuntime)?;
    let plan = runtime.block_on(plan_routes(source, config.query.clone(), config.count))?;
    log::info!(
        "ranked {} routes from {:?} to {:?}",
        plan.routes.len(),
        plan.query.from,
        plan.query.to
    );
    Ok(plan)
}

pub(super) fn render_output(plan: &RoutePlan, config: &PlanConfig) -> Result<String, CliError> {
    let Some(mode) = &config.preview else {
        return match config.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(plan).map_err(CliError::SerialiseOutput)
            }
            OutputFormat::Text => Ok(plan_text(plan)),
        };
    };

    let route = plan
        .select_route(mode)
        .ok_or_else(|| CliError::RouteNotRanked { mode: mode.clone() })?;
    let preview = MapPreview::placeholder(route);
    match config.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&preview).map_err(CliError::SerialiseOutput)
        }
        OutputFormat::Text => Ok(preview_text(&preview)),
    }
}

fn plan_text(plan: &RoutePlan) -> String {
    let mut lines = vec![format!(
        "Routes from {} to {}",
        plan.query.from, plan.query.to
    )];
    if plan.routes.is_empty() {
        lines.push("No routes found.".to_owned());
    }
    for (rank, route) in plan.routes.iter().enumerate() {
        let entry = format!("{}. {}", rank + 1, RouteDetails::new(route));
        lines.push(entry.trim_end().to_owned());
    }
    lines.join("\n")
}

fn preview_text(preview: &MapPreview) -> String {
    let mut lines = vec![preview.heading.clone()];
    lines.extend(preview.markers.iter().map(|marker| {
        format!(
            "{}: {:.5}, {:.5}",
            marker.title, marker.coordinate.y, marker.coordinate.x
        )
    }));
    lines.extend(preview.details().lines());
    lines.join("\n")
}

fn write_output(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
