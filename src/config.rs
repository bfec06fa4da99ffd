//! Settings for the walkthrough binary.
//!
//! Layered lowest to highest: built-in defaults, a TOML file (`presence.toml`
//! unless a path is given), then `PRESENCE_*` environment variables
//! (e.g. `PRESENCE_SEED=42`, `PRESENCE_SCENARIO=or_else_get`).

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::demo::Scenario;
use crate::error::Result;
use crate::probe::DEFAULT_THRESHOLD;

pub const DEFAULT_CONFIG_FILE: &str = "presence.toml";
pub const ENV_PREFIX: &str = "PRESENCE";
pub const DEFAULT_AIRCRAFT_ID: &str = "SAT3455";
pub const DEFAULT_ACTUAL_FLIGHT_LEVEL: u32 = 350;
pub const DEFAULT_REQUESTED_FLIGHT_LEVEL: u32 = 360;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    pub scenario: Scenario,
    pub seed: Option<u64>, // entropy when unset
    pub aircraft_id: String,
    pub conflict_threshold: u32, // per mille
    pub actual_flight_level: u32,
    pub requested_flight_level: u32,
}

impl DemoConfig {
    /// Loads the layered settings. An explicitly given file must exist;
    /// the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        let settings = Config::builder()
            .set_default("scenario", Scenario::TheProblem.name())?
            .set_default("aircraft_id", DEFAULT_AIRCRAFT_ID)?
            .set_default("conflict_threshold", i64::from(DEFAULT_THRESHOLD))?
            .set_default("actual_flight_level", i64::from(DEFAULT_ACTUAL_FLIGHT_LEVEL))?
            .set_default("requested_flight_level", i64::from(DEFAULT_REQUESTED_FLIGHT_LEVEL))?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let loaded: DemoConfig = settings.try_deserialize()?;
        debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::TheProblem,
            seed: None,
            aircraft_id: DEFAULT_AIRCRAFT_ID.to_string(),
            conflict_threshold: DEFAULT_THRESHOLD,
            actual_flight_level: DEFAULT_ACTUAL_FLIGHT_LEVEL,
            requested_flight_level: DEFAULT_REQUESTED_FLIGHT_LEVEL,
        }
    }
}
