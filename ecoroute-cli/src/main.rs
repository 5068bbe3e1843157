//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use ecoroute_cli::CliError;

fn main() {
    env_logger::init();

    match ecoroute_cli::run() {
        Ok(()) => {}
        // Help and version requests are reported by clap itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("ecoroute: {err}");
            std::process::exit(1);
        }
    }
}
