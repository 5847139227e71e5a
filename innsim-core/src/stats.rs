//! Occupancy percentage arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HotelError;

/// How the per-category occupancy figure is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryStatsMode {
    /// Every category divides the hotel-wide occupied room-days by its own
    /// remaining room count.
    #[default]
    Literal,
    /// Each category divides the room-days of its own bookings by the rooms
    /// it was seeded with.
    ByCategory,
}

impl fmt::Display for CategoryStatsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryStatsMode::Literal => f.write_str("literal"),
            CategoryStatsMode::ByCategory => f.write_str("by-category"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// `occupied / (rooms * num_days) * 100`, or an error when the
/// denominator is zero.
pub fn occupancy_percent(occupied: u64, rooms: u64, num_days: u32) -> Result<Percent, HotelError> {
    let denominator = rooms as f64 * f64::from(num_days);
    if denominator == 0.0 {
        let reason = if rooms == 0 {
            "no rooms to divide by"
        } else {
            "empty simulation window"
        };
        return Err(HotelError::StatisticsUnavailable(reason.to_string()));
    }
    Ok(Percent(occupied as f64 / denominator * 100.0))
}
