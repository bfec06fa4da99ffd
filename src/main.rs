//! Walks a flight's level-change request through the optional-value scenarios.
//!
//! Usage: `presence [scenario] [config-path]`. The scenario defaults to the one
//! configured (see `presence::config`); `RUST_LOG` controls verbosity.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use presence::config::DemoConfig;
use presence::demo::{Demo, Scenario};

fn run() -> presence::Result<()> {
    let mut args = std::env::args().skip(1);
    let scenario = args.next().map(|s| s.parse::<Scenario>()).transpose()?;
    let config_path = args.next().map(PathBuf::from);

    let config = DemoConfig::load(config_path.as_deref())?;
    let scenario = scenario.unwrap_or(config.scenario);
    info!(%scenario, seed = ?config.seed, aircraft = %config.aircraft_id, "starting");

    Demo::from_config(&config).run(scenario)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "scenario failed");
            ExitCode::FAILURE
        }
    }
}
