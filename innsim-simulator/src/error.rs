use std::path::PathBuf;

use innsim_core::HotelError;
use innsim_telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Hotel state error: {0}")]
    Hotel(#[from] HotelError),

    #[error("Scenario file not found: {0}")]
    ScenarioNotFound(PathBuf),

    #[error("Scenario format error: {0}")]
    Scenario(#[from] serde_yaml::Error),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
