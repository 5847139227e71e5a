//! Structured logging with `tracing`.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global fmt subscriber writing to stderr. `RUST_LOG` wins
    /// over `default_level` when set. A second call is a no-op.
    pub fn init(default_level: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let installed = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .try_init();

        if installed.is_err() {
            tracing::debug!("Global subscriber already installed");
        }
    }

    /// Logs the parameters a run starts with.
    pub fn log_run_start(num_rooms: u32, num_days: u32, seed: Option<u64>) {
        tracing::info!(num_rooms, num_days, seed = ?seed, "Simulation started");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_logging() {
        EventLogger::log_run_start(20, 14, Some(7));
        assert!(logs_contain("Simulation started"));
        assert!(logs_contain("num_rooms=20"));
    }
}
