//! Replay of recorded tick sequences.
//!
//! A [`Scenario`] stores the seed, start time, clock offsets and event kinds
//! of a run. The scripted driver consumes the same generator draws per tick
//! as [`RandomizedEventDriver`](crate::RandomizedEventDriver), so a replay
//! seeded like the recording produces the same bookings and the same report.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use innsim_core::clock::SimulationClock;
use innsim_core::HotelError;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::driver::{EventDriver, EventKind, Tick};
use crate::randomized_event_driver::{MAX_STEP_HOURS, MIN_STEP_HOURS};
use crate::SimulationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedTick {
    pub offset_hours: u32,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    pub ticks: Vec<ScriptedTick>,
}

impl Scenario {
    /// Captures the ticks of a finished run.
    pub fn record(seed: Option<u64>, start: NaiveDateTime, ticks: &[Tick]) -> Self {
        Self {
            seed,
            start: Some(start),
            ticks: ticks
                .iter()
                .map(|t| ScriptedTick {
                    offset_hours: t.offset_hours,
                    kind: t.kind,
                })
                .collect(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SimulationError::ScenarioNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), SimulationError> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Plays back a [`Scenario`], stopping at whichever comes first: the end
/// of the script or the end of the simulated window.
pub struct ScriptedEventDriver {
    clock: SimulationClock,
    ticks: VecDeque<ScriptedTick>,
}

impl ScriptedEventDriver {
    pub fn new(clock: SimulationClock, scenario: Scenario) -> Self {
        Self {
            clock,
            ticks: scenario.ticks.into(),
        }
    }
}

impl EventDriver for ScriptedEventDriver {
    fn next_tick(&mut self, rng: &mut dyn RngCore) -> Result<Option<Tick>, HotelError> {
        if self.clock.is_finished() {
            return Ok(None);
        }
        let Some(step) = self.ticks.pop_front() else {
            return Ok(None);
        };
        // Keep the generator in step with the randomized driver.
        let _ = rng.random_range(MIN_STEP_HOURS..=MAX_STEP_HOURS);
        let _ = rng.random_bool(0.5);
        let at = self.clock.advance_hours(step.offset_hours)?;
        Ok(Some(Tick {
            at,
            offset_hours: step.offset_hours,
            kind: step.kind,
        }))
    }
}
