//! # innsim Telemetry
//!
//! Logging setup and run metrics for the simulator.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::{MetricsRecorder, TelemetryError};
