use innsim_core::clock::SimulationClock;
use innsim_core::HotelError;
use rand::{Rng, RngCore};

use crate::driver::{EventDriver, EventKind, Tick};

pub const MIN_STEP_HOURS: u32 = 1;
pub const MAX_STEP_HOURS: u32 = 5;

/// Steps the clock by 1 to 5 hours and fires a booking or a check-in with
/// equal probability, until the clock passes its end time.
pub struct RandomizedEventDriver {
    clock: SimulationClock,
}

impl RandomizedEventDriver {
    pub fn new(clock: SimulationClock) -> Self {
        RandomizedEventDriver { clock }
    }
}

impl EventDriver for RandomizedEventDriver {
    fn next_tick(&mut self, rng: &mut dyn RngCore) -> Result<Option<Tick>, HotelError> {
        if self.clock.is_finished() {
            return Ok(None);
        }
        let offset_hours = rng.random_range(MIN_STEP_HOURS..=MAX_STEP_HOURS);
        let at = self.clock.advance_hours(offset_hours)?;
        let kind = if rng.random_bool(0.5) {
            EventKind::Booking
        } else {
            EventKind::CheckIn
        };
        Ok(Some(Tick {
            at,
            offset_hours,
            kind,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_driver_stays_within_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let clock = SimulationClock::new(start, 3).unwrap();
        let end = clock.end();
        let mut driver = RandomizedEventDriver::new(clock);
        let mut rng = StdRng::seed_from_u64(42);

        let mut previous = start;
        let mut ticks = 0;
        while let Some(tick) = driver.next_tick(&mut rng).unwrap() {
            assert!((MIN_STEP_HOURS..=MAX_STEP_HOURS).contains(&tick.offset_hours));
            assert_eq!(
                (tick.at - previous).num_hours(),
                i64::from(tick.offset_hours)
            );
            // The last tick may land past the end; nothing follows it.
            assert!(previous < end);
            previous = tick.at;
            ticks += 1;
        }
        assert!(previous >= end);
        // 72 hours at 1..=5 hours per step.
        assert!((15..=72).contains(&ticks));
    }
}
