//! # innsim Simulator
//!
//! Drives a [`Hotel`] through simulated time and reports occupancy.
//!
//! ## Key Components:
//! - **Event drivers:** randomized ticks or a replayed [`Scenario`].
//! - **Simulator:** applies each tick to the hotel and writes a tagged
//!   line to the output sink.
//! - **Statistics reporter:** end-of-run occupancy figures.
//!
//! A single generator feeds every random choice, so a seed plus a start
//! time pins down the whole run.

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, instrument};

use innsim_config::SimulationConfig;
use innsim_core::catalog::Category;
use innsim_core::clock::SimulationClock;
use innsim_core::hotel::BookingOutcome;
use innsim_core::output::{OutputLine, OutputSink};
use innsim_core::stats::CategoryStatsMode;
use innsim_core::Hotel;
use innsim_telemetry::MetricsRecorder;

pub mod driver;
pub mod error;
pub mod messages;
pub mod randomized_event_driver;
pub mod replay;
pub mod report;
pub mod sink;

pub use driver::{EventDriver, EventKind, Tick};
pub use error::SimulationError;
pub use randomized_event_driver::RandomizedEventDriver;
pub use replay::{Scenario, ScriptedEventDriver};
pub use report::{OccupancyReport, StatisticsReporter};

/// Counts of what happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub confirmed: [u32; 4],
    pub refused: u64,
    pub check_ins: u64,
    pub idle_check_ins: u64,
}

impl RunStats {
    pub fn confirmed_for(&self, category: Category) -> u32 {
        self.confirmed[category.index()]
    }
}

pub struct Simulator<R: RngCore = StdRng> {
    hotel: Hotel,
    rng: R,
    reporter: StatisticsReporter,
    metrics: Option<MetricsRecorder>,
    history: Vec<Tick>,
    stats: RunStats,
}

impl Simulator<StdRng> {
    /// Seeds from `seed`, or from the OS when `None`.
    pub fn seeded(num_rooms: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Simulator::new(num_rooms, rng)
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Simulator::seeded(config.num_rooms, config.seed)
            .with_category_stats(config.category_stats)
    }
}

impl<R: RngCore> Simulator<R> {
    pub fn new(num_rooms: u32, rng: R) -> Self {
        Self {
            hotel: Hotel::new(num_rooms),
            rng,
            reporter: StatisticsReporter::default(),
            metrics: None,
            history: Vec::new(),
            stats: RunStats::default(),
        }
    }

    pub fn with_category_stats(mut self, mode: CategoryStatsMode) -> Self {
        self.reporter = StatisticsReporter::new(mode);
        self
    }

    pub fn with_metrics(mut self, metrics: MetricsRecorder) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// Ticks executed so far, in order.
    pub fn history(&self) -> &[Tick] {
        &self.history
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Runs the randomized event loop from `start` for `num_days` days, then
    /// writes the statistics report to `sink`.
    #[instrument(skip(self, sink))]
    pub fn run<S: OutputSink + ?Sized>(
        &mut self,
        start: NaiveDateTime,
        num_days: u32,
        sink: &mut S,
    ) -> Result<OccupancyReport, SimulationError> {
        let clock = SimulationClock::new(start, num_days)?;
        let mut driver = RandomizedEventDriver::new(clock);
        self.run_with_driver(&mut driver, num_days, sink)
    }

    /// Runs ticks from `driver` until it is exhausted, then writes the
    /// statistics report to `sink`.
    #[instrument(skip(self, driver, sink))]
    pub fn run_with_driver<D, S>(
        &mut self,
        driver: &mut D,
        num_days: u32,
        sink: &mut S,
    ) -> Result<OccupancyReport, SimulationError>
    where
        D: EventDriver + ?Sized,
        S: OutputSink + ?Sized,
    {
        info!(
            num_days,
            mode = %self.reporter.mode(),
            "Starting event loop"
        );

        while let Some(tick) = driver.next_tick(&mut self.rng)? {
            self.step(tick, sink)?;
        }

        let report = self.reporter.report(num_days, &self.hotel);
        for line in report.lines() {
            sink.emit(line)?;
        }

        info!(
            ticks = self.stats.ticks,
            check_ins = self.stats.check_ins,
            occupied_room_days = report.occupied_room_days,
            "Simulation finished"
        );
        Ok(report)
    }

    /// Applies a single tick.
    pub fn step<S: OutputSink + ?Sized>(
        &mut self,
        tick: Tick,
        sink: &mut S,
    ) -> Result<(), SimulationError> {
        debug!(at = %tick.at, kind = ?tick.kind, "Tick");
        self.history.push(tick);
        self.stats.ticks += 1;
        if let Some(metrics) = &self.metrics {
            metrics.inc_ticks();
        }

        match tick.kind {
            EventKind::Booking => {
                let outcome = self.hotel.request_booking(tick.at, &mut self.rng);
                match &outcome {
                    BookingOutcome::Confirmed(booking) => {
                        self.stats.confirmed[booking.category.index()] += 1;
                        if let Some(metrics) = &self.metrics {
                            metrics.inc_bookings_confirmed();
                        }
                    }
                    BookingOutcome::SoldOut { .. } => {
                        self.stats.refused += 1;
                        if let Some(metrics) = &self.metrics {
                            metrics.inc_bookings_refused();
                        }
                    }
                }
                sink.emit(messages::booking_line(&outcome))?;
            }
            EventKind::CheckIn => match self.hotel.check_in(&mut self.rng) {
                Some(check_in) => {
                    self.stats.check_ins += 1;
                    if let Some(metrics) = &self.metrics {
                        metrics.record_check_in(check_in.room_days);
                    }
                    sink.emit(messages::check_in_line(&check_in))?;
                }
                None => self.stats.idle_check_ins += 1,
            },
        }
        Ok(())
    }
}

/// Runs a full simulation with a hotel of `num_rooms` rooms per category,
/// starting now, and returns every output line in order.
pub fn simulate(num_rooms: u32, num_days: u32) -> Result<Vec<OutputLine>, SimulationError> {
    let mut lines = Vec::new();
    Simulator::seeded(num_rooms, None).run(Local::now().naive_local(), num_days, &mut lines)?;
    Ok(lines)
}
