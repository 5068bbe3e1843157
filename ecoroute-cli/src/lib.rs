//! Command-line interface for planning low-emission routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_PLAN_FROM: &str = "from";
const ARG_PLAN_TO: &str = "to";
const ARG_PLAN_COUNT: &str = "count";
const ARG_PLAN_ROUTES_FILE: &str = "routes-file";
const ARG_PLAN_DELAY_MS: &str = "delay-ms";
const ARG_PLAN_PREVIEW: &str = "preview";
const ARG_PLAN_FORMAT: &str = "format";
const ENV_PLAN_FROM: &str = "ECOROUTE_CMDS_PLAN_FROM";
const ENV_PLAN_TO: &str = "ECOROUTE_CMDS_PLAN_TO";

/// Run the ecoroute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ecoroute",
    about = "Rank travel options between two addresses by environmental score",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch candidate routes and list the best-scoring ones.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
