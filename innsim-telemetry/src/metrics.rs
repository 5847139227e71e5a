//! ## innsim-telemetry::metrics
//! **Prometheus counters for simulation runs**

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Metrics registry error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Metrics exposition is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub ticks: IntCounter,
    pub bookings_confirmed: IntCounter,
    pub bookings_refused: IntCounter,
    pub check_ins: IntCounter,
    pub occupied_room_days: IntCounter,
}

impl MetricsRecorder {
    pub fn new() -> Result<Self, TelemetryError> {
        let registry = Registry::new();

        let ticks = IntCounter::new("innsim_ticks_total", "Simulated clock ticks")?;
        let bookings_confirmed =
            IntCounter::new("innsim_bookings_confirmed_total", "Confirmed bookings")?;
        let bookings_refused = IntCounter::new(
            "innsim_bookings_refused_total",
            "Booking requests refused for lack of rooms",
        )?;
        let check_ins = IntCounter::new("innsim_check_ins_total", "Guests checked in")?;
        let occupied_room_days = IntCounter::new(
            "innsim_occupied_room_days_total",
            "Room-days marked occupied by check-ins",
        )?;

        registry.register(Box::new(ticks.clone()))?;
        registry.register(Box::new(bookings_confirmed.clone()))?;
        registry.register(Box::new(bookings_refused.clone()))?;
        registry.register(Box::new(check_ins.clone()))?;
        registry.register(Box::new(occupied_room_days.clone()))?;

        Ok(Self {
            registry,
            ticks,
            bookings_confirmed,
            bookings_refused,
            check_ins,
            occupied_room_days,
        })
    }

    /// Text exposition of every registered metric.
    pub fn gather_metrics(&self) -> Result<String, TelemetryError> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    pub fn inc_ticks(&self) {
        self.ticks.inc();
    }

    pub fn inc_bookings_confirmed(&self) {
        self.bookings_confirmed.inc();
    }

    pub fn inc_bookings_refused(&self) {
        self.bookings_refused.inc();
    }

    pub fn record_check_in(&self, room_days: u64) {
        self.check_ins.inc();
        self.occupied_room_days.inc_by(room_days);
    }
}
