//! Example payloads: flights asking for a level change and the conflicts a probe may report.

// used to print out readable forms of flights and conflicts
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::{PresenceError, Result};
use crate::optional::Optional;
use crate::probe::AirspaceProbe;

pub const DEFAULT_CONFLICT_ID: i32 = -1;

// ------------- Conflict -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conflict {
    id: i32,
}

impl Conflict {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
    pub fn id(&self) -> i32 {
        self.id
    }
}
impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Conflict{{conflictId={}}}", self.id)
    }
}

// ------------- Flight -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    aircraft_id: String,
    flight_level: u32,
}

impl Flight {
    pub fn new(aircraft_id: impl Into<String>) -> Self {
        Self {
            aircraft_id: aircraft_id.into(),
            flight_level: 0,
        }
    }
    pub fn aircraft_id(&self) -> &str {
        &self.aircraft_id
    }
    pub fn flight_level(&self) -> u32 {
        self.flight_level
    }
    pub fn set_flight_level(&mut self, flight_level: u32) {
        self.flight_level = flight_level;
    }
    /// Probes the airspace and reports the outcome as an [`Optional`].
    pub fn probe_for_conflict<P: AirspaceProbe + ?Sized>(&self, probe: &mut P) -> Optional<Conflict> {
        Optional::of_nullable(self.probe_for_conflict_legacy(probe))
    }
    /// The pre-container signature: callers get a bare nullable result
    /// and must remember to check it themselves.
    pub fn probe_for_conflict_legacy<P: AirspaceProbe + ?Sized>(&self, probe: &mut P) -> Option<Conflict> {
        let conflict = probe.probe();
        debug!(aircraft = %self.aircraft_id, level = self.flight_level, conflict = ?conflict, "airspace probed");
        conflict
    }
}
impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Flight{{aircraftID={}}}", self.aircraft_id)
    }
}

// ------------- Errors raised by callers -------------
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No conflict detected for {aircraft_id}")]
pub struct NoConflictError {
    aircraft_id: String,
}

impl NoConflictError {
    pub fn new(aircraft_id: impl Into<String>) -> Self {
        Self { aircraft_id: aircraft_id.into() }
    }
    pub fn aircraft_id(&self) -> &str {
        &self.aircraft_id
    }
}

/// Broadcasts a conflict to every downstream consumer as JSON.
///
/// This is the legacy sink and accepts a nullable conflict; handing it nothing
/// is the null dereference the container exists to prevent.
pub fn send_to_distributed_applications(conflict: Option<&Conflict>) -> Result<String> {
    let conflict = conflict.ok_or(PresenceError::EmptyValueAccess)?;
    let message = serde_json::to_string(conflict)?;
    info!(conflict_id = conflict.id(), %message, "conflict broadcast");
    Ok(message)
}
