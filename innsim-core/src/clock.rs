//! # Simulation Clock
//!
//! Simulated time used by the event loop. It only moves when the loop
//! advances it and never looks at the wall clock after construction.

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::HotelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    now: NaiveDateTime,
    end: NaiveDateTime,
}

impl SimulationClock {
    /// Starts at `start` and finishes `num_days` days later.
    pub fn new(start: NaiveDateTime, num_days: u32) -> Result<Self, HotelError> {
        let end = TimeDelta::try_days(i64::from(num_days))
            .and_then(|span| start.checked_add_signed(span))
            .ok_or_else(|| {
                HotelError::ClockOverflow(format!("{start} + {num_days} days"))
            })?;
        Ok(Self { now: start, end })
    }

    #[inline]
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    #[inline]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// True once the clock has reached or passed the end time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.now >= self.end
    }

    /// Moves the clock forward by whole hours and returns the new time.
    pub fn advance_hours(&mut self, hours: u32) -> Result<NaiveDateTime, HotelError> {
        self.now = TimeDelta::try_hours(i64::from(hours))
            .and_then(|step| self.now.checked_add_signed(step))
            .ok_or_else(|| HotelError::ClockOverflow(format!("{} + {hours}h", self.now)))?;
        Ok(self.now)
    }
}
