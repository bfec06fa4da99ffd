//! Narrated scenarios walking a flight's level-change request through every
//! way of producing, inspecting and defaulting an [`Optional`].
//!
//! Each scenario is a method returning what it computed, so the narration
//! (emitted through `tracing`) and the outcome can be checked separately.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::DemoConfig;
use crate::error::{PresenceError, Result};
use crate::flight::{Conflict, DEFAULT_CONFLICT_ID, Flight, NoConflictError, send_to_distributed_applications};
use crate::optional::Optional;
use crate::probe::{AirspaceProbe, RandomProbe};
use crate::sequence::PresentValues;

/// Id used for conflicts the scenarios build by hand rather than probe for.
pub const SAMPLE_CONFLICT_ID: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    TheProblem,
    TheSolution,
    CreateOptionals,
    RetrieveImperative,
    UnguardedGet,
    FunctionalMap,
    OrElse,
    OrElseGet,
    OrDefaultOptional,
    OrElseThrow,
    SquawkCodes,
    ConflictsFlatMap,
    All,
}

impl Scenario {
    /// Every individual scenario, in narration order.
    pub const EACH: [Scenario; 12] = [
        Scenario::TheProblem,
        Scenario::TheSolution,
        Scenario::CreateOptionals,
        Scenario::RetrieveImperative,
        Scenario::UnguardedGet,
        Scenario::FunctionalMap,
        Scenario::OrElse,
        Scenario::OrElseGet,
        Scenario::OrDefaultOptional,
        Scenario::OrElseThrow,
        Scenario::SquawkCodes,
        Scenario::ConflictsFlatMap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::TheProblem => "the_problem",
            Scenario::TheSolution => "the_solution",
            Scenario::CreateOptionals => "create_optionals",
            Scenario::RetrieveImperative => "retrieve_imperative",
            Scenario::UnguardedGet => "unguarded_get",
            Scenario::FunctionalMap => "functional_map",
            Scenario::OrElse => "or_else",
            Scenario::OrElseGet => "or_else_get",
            Scenario::OrDefaultOptional => "or_default_optional",
            Scenario::OrElseThrow => "or_else_throw",
            Scenario::SquawkCodes => "squawk_codes",
            Scenario::ConflictsFlatMap => "conflicts_flat_map",
            Scenario::All => "all",
        }
    }
}
impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Scenario {
    type Err = PresenceError;
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        if wanted == Scenario::All.name() {
            return Ok(Scenario::All);
        }
        Scenario::EACH
            .into_iter()
            .find(|scenario| scenario.name() == wanted)
            .ok_or_else(|| PresenceError::Config(format!("Unknown scenario: {s}")))
    }
}

// ------------- Demo -------------
#[derive(Debug)]
pub struct Demo<P> {
    flight: Flight,
    probe: P,
    requested_flight_level: u32,
    default_conflicts_built: usize,
}

impl Demo<RandomProbe> {
    pub fn from_config(config: &DemoConfig) -> Self {
        let mut flight = Flight::new(config.aircraft_id.clone());
        flight.set_flight_level(config.actual_flight_level);
        Demo::new(
            flight,
            RandomProbe::new(config.seed, config.conflict_threshold),
            config.requested_flight_level,
        )
    }
}

impl<P: AirspaceProbe> Demo<P> {
    pub fn new(flight: Flight, probe: P, requested_flight_level: u32) -> Self {
        Self {
            flight,
            probe,
            requested_flight_level,
            default_conflicts_built: 0,
        }
    }
    pub fn flight(&self) -> &Flight {
        &self.flight
    }
    /// How many times the default conflict has been constructed so far.
    pub fn default_conflicts_built(&self) -> usize {
        self.default_conflicts_built
    }

    pub fn run(&mut self, scenario: Scenario) -> Result<()> {
        info!(%scenario, flight = %self.flight, "running scenario");
        match scenario {
            Scenario::TheProblem => recover(self.the_problem().map(drop)),
            Scenario::TheSolution => self.the_solution().map(drop),
            Scenario::CreateOptionals => self.create_optionals().map(drop),
            Scenario::RetrieveImperative => {
                self.retrieve_imperative();
                Ok(())
            }
            Scenario::UnguardedGet => recover(self.unguarded_get().map(drop)),
            Scenario::FunctionalMap => {
                self.functional_map();
                Ok(())
            }
            Scenario::OrElse => {
                self.or_else();
                Ok(())
            }
            Scenario::OrElseGet => {
                self.or_else_get();
                Ok(())
            }
            Scenario::OrDefaultOptional => {
                self.or_default_optional();
                Ok(())
            }
            Scenario::OrElseThrow => recover(self.or_else_throw().map(drop).map_err(PresenceError::from)),
            Scenario::SquawkCodes => self.squawk_codes().map(drop),
            Scenario::ConflictsFlatMap => {
                self.conflicts_flat_map();
                Ok(())
            }
            Scenario::All => Scenario::EACH.into_iter().try_for_each(|each| self.run(each)),
        }
    }

    fn level_change_requested(&self) -> bool {
        self.flight.flight_level() != self.requested_flight_level
    }

    /// The legacy probe hands back a nullable conflict which goes straight to the
    /// broadcast, so a clear airspace ends up as an empty access downstream.
    pub fn the_problem(&mut self) -> Result<Option<String>> {
        if !self.level_change_requested() {
            return Ok(None);
        }
        let conflict = self.flight.probe_for_conflict_legacy(&mut self.probe);
        send_to_distributed_applications(conflict.as_ref()).map(Some)
    }

    /// The optional result cannot be broadcast by accident; only a present
    /// conflict reaches the sink.
    pub fn the_solution(&mut self) -> Result<Optional<Conflict>> {
        if !self.level_change_requested() {
            return Ok(Optional::empty());
        }
        let conflict = self.flight.probe_for_conflict(&mut self.probe);
        for present in &conflict {
            send_to_distributed_applications(Some(present))?;
        }
        Ok(conflict)
    }

    /// The three factories. `of` refuses a missing value, the other two do not.
    pub fn create_optionals(&mut self) -> Result<Vec<Optional<Conflict>>> {
        let null_conflict: Option<Conflict> = None;
        let real_conflict = Conflict::new(SAMPLE_CONFLICT_ID);

        if let Err(e) = Optional::of(null_conflict) {
            warn!(error = %e, "of() refused a missing conflict");
        }
        let created = vec![
            Optional::of(Some(real_conflict))?,
            Optional::of_nullable(null_conflict),
            Optional::empty(),
        ];
        info!(created = created.len(), present = created.iter().copied().count_present(), "optionals created");
        Ok(created)
    }

    /// Nullable check versus presence check, both written imperatively.
    pub fn retrieve_imperative(&mut self) -> String {
        match self.flight.probe_for_conflict_legacy(&mut self.probe) {
            Some(conflict) => info!(conflict_id = conflict.id(), "Conflict detected"),
            None => info!("No Conflict"),
        }

        let optional = self.flight.probe_for_conflict(&mut self.probe);
        let message = if optional.is_present() {
            match optional.get() {
                Ok(conflict) => format!("Conflict id: {conflict}"),
                // unreachable: presence was checked above
                Err(e) => e.to_string(),
            }
        } else {
            "missing Conflict id".to_string()
        };
        info!(%message, "optional retrieved");
        message
    }

    /// Takes the value out without checking first.
    pub fn unguarded_get(&mut self) -> Result<i32> {
        let optional = self.flight.probe_for_conflict(&mut self.probe);
        let id = optional.get()?.id();
        info!(conflict_id = id, "unguarded get succeeded");
        Ok(id)
    }

    pub fn functional_map(&mut self) -> Optional<i32> {
        let ids = self.flight.probe_for_conflict(&mut self.probe).map(|conflict| conflict.id());
        ids.if_present_or_else(
            |id| info!(conflict_id = *id, "conflict detected"),
            || info!("No Conflicts detected"),
        );
        ids
    }

    fn default_conflict(&mut self) -> Conflict {
        self.default_conflicts_built += 1;
        info!(built = self.default_conflicts_built, "default conflict requested");
        Conflict::new(DEFAULT_CONFLICT_ID)
    }

    /// The default is built before `or_else` ever looks at the optional.
    pub fn or_else(&mut self) -> Conflict {
        let optional = self.flight.probe_for_conflict(&mut self.probe);
        let conflict = optional.or_else(self.default_conflict());
        info!(conflict_id = conflict.id(), "or_else conflict");
        conflict
    }

    /// The default is only built when nothing was found.
    pub fn or_else_get(&mut self) -> Conflict {
        let optional = self.flight.probe_for_conflict(&mut self.probe);
        let conflict = optional.or_else_get(|| self.default_conflict());
        info!(conflict_id = conflict.id(), "or_else_get conflict");
        conflict
    }

    /// Falls back to a default *optional*, not a bare conflict.
    pub fn or_default_optional(&mut self) -> Optional<Conflict> {
        let optional = self.flight.probe_for_conflict(&mut self.probe);
        optional.or(|| Optional::present(self.default_conflict()))
    }

    pub fn or_else_throw(&mut self) -> std::result::Result<Conflict, NoConflictError> {
        let optional = self.flight.probe_for_conflict(&mut self.probe);
        let flight = &self.flight;
        optional.or_else_throw(|| NoConflictError::new(flight.aircraft_id()))
    }

    /// Filter on presence, then take each value out.
    pub fn squawk_codes(&self) -> Result<Vec<u16>> {
        let codes = [Optional::present(1234_u16), Optional::empty(), Optional::present(4531)];
        let present = codes
            .into_iter()
            .filter(Optional::is_present)
            .map(Optional::into_value)
            .collect::<Result<Vec<_>>>()?;
        for code in &present {
            info!(squawk = *code, "squawk code");
        }
        Ok(present)
    }

    /// Flattening drops the absent entries in one step.
    pub fn conflicts_flat_map(&self) -> Vec<Conflict> {
        let null_conflict: Option<Conflict> = None;
        let conflicts = [
            Optional::empty(),
            Optional::present(Conflict::new(SAMPLE_CONFLICT_ID)),
            Optional::of_nullable(null_conflict),
        ];
        let actual: Vec<Conflict> = conflicts.into_iter().present_values().collect();
        for conflict in &actual {
            info!(%conflict, "actual conflict");
        }
        actual
    }
}

// Errors the scenarios deliberately provoke are narrated, not fatal.
fn recover(result: Result<()>) -> Result<()> {
    match result {
        Err(e @ (PresenceError::EmptyValueAccess | PresenceError::NoConflict(_))) => {
            warn!(error = %e, "recovered");
            Ok(())
        }
        other => other,
    }
}
