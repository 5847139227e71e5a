//! Simulation run parameters.

use chrono::NaiveDateTime;
use innsim_core::stats::CategoryStatsMode;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimulationConfig {
    /// Rooms seeded into each of the four categories.
    #[serde(default = "default_num_rooms")]
    #[validate(range(max = 10_000))]
    pub num_rooms: u32,

    /// Length of the simulated window in days.
    #[serde(default = "default_num_days")]
    #[validate(range(max = 3_650))]
    pub num_days: u32,

    /// Generator seed. Unset means a fresh seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Simulated start time. Unset means the local time at launch.
    #[serde(default)]
    pub start: Option<NaiveDateTime>,

    #[serde(default)]
    pub category_stats: CategoryStatsMode,
}

fn default_num_rooms() -> u32 {
    20
}

fn default_num_days() -> u32 {
    14
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_rooms: default_num_rooms(),
            num_days: default_num_days(),
            seed: None,
            start: None,
            category_stats: CategoryStatsMode::default(),
        }
    }
}
