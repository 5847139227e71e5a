//! # innsim-core
//!
//! State model for the hotel booking simulation.
//!
//! ### Key Submodules:
//! - `catalog`: the four fixed room categories and their remaining inventory
//! - `ledger`: open bookings keyed by confirmation code
//! - `occupancy`: occupied room counts per calendar date
//! - `clock`: simulated time, unrelated to wall-clock time
//! - `hotel`: the aggregate that applies booking and check-in events
//! - `output`: tagged output lines and the sink they are written to
//! - `stats`: occupancy percentage arithmetic

pub mod catalog;
pub mod clock;
pub mod error;
pub mod hotel;
pub mod ledger;
pub mod occupancy;
pub mod output;
pub mod stats;

pub mod prelude {
    pub use crate::catalog::*;
    pub use crate::clock::*;
    pub use crate::error::*;
    pub use crate::hotel::*;
    pub use crate::ledger::*;
    pub use crate::occupancy::*;
    pub use crate::output::*;
    pub use crate::stats::*;
}

pub use error::HotelError;
pub use hotel::Hotel;
