//! Defines the EventDriver trait for feeding ticks into the simulator.

use chrono::NaiveDateTime;
use innsim_core::HotelError;
use rand::RngCore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Booking,
    CheckIn,
}

/// One step of the simulated clock and the event fired at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub at: NaiveDateTime,
    pub offset_hours: u32,
    pub kind: EventKind,
}

pub trait EventDriver {
    /// Advances simulated time and returns the next tick, or `None` once
    /// the clock has reached the end of the window.
    ///
    /// Drivers draw from the simulator's generator so that a single seed
    /// covers every random choice in a run.
    fn next_tick(&mut self, rng: &mut dyn RngCore) -> Result<Option<Tick>, HotelError>;
}
