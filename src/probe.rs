//! Airspace probes: where conflicts come from.
//!
//! The flight does not roll its own dice. Whatever decides whether a conflict
//! exists is handed in as an [`AirspaceProbe`], so a seeded generator or a fixed
//! script can stand in for live randomness.

use std::collections::VecDeque;

// SmallRng is fast and seedable, which is all a probe needs
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::flight::Conflict;

/// Draws happen in `0..PROBE_RANGE`; a draw below the threshold is a conflict.
pub const PROBE_RANGE: u32 = 1000;
pub const DEFAULT_THRESHOLD: u32 = 500;
pub const MAX_CONFLICT_ID: i32 = 100;

pub trait AirspaceProbe {
    fn probe(&mut self) -> Option<Conflict>;
}

impl<F> AirspaceProbe for F
where
    F: FnMut() -> Option<Conflict>,
{
    fn probe(&mut self) -> Option<Conflict> {
        self()
    }
}

// ------------- RandomProbe -------------
#[derive(Debug, Clone)]
pub struct RandomProbe {
    rng: SmallRng,
    threshold: u32,
}

impl RandomProbe {
    /// Seeds from entropy when no seed is given.
    pub fn new<S: Into<Option<u64>>>(seed: S, threshold: u32) -> Self {
        Self {
            rng: seed.into().map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64),
            threshold: threshold.min(PROBE_RANGE),
        }
    }
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
impl Default for RandomProbe {
    fn default() -> Self {
        Self::new(None, DEFAULT_THRESHOLD)
    }
}
impl AirspaceProbe for RandomProbe {
    fn probe(&mut self) -> Option<Conflict> {
        let draw = self.rng.gen_range(0..PROBE_RANGE);
        (draw < self.threshold).then(|| Conflict::new(self.rng.gen_range(0..=MAX_CONFLICT_ID)))
    }
}

// ------------- ScriptedProbe -------------
/// Replays a fixed list of outcomes, then reports a clear airspace.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProbe {
    outcomes: VecDeque<Option<Conflict>>,
}

impl ScriptedProbe {
    pub fn new<I: IntoIterator<Item = Option<Conflict>>>(outcomes: I) -> Self {
        Self { outcomes: outcomes.into_iter().collect() }
    }
    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}
impl AirspaceProbe for ScriptedProbe {
    fn probe(&mut self) -> Option<Conflict> {
        self.outcomes.pop_front().flatten()
    }
}
