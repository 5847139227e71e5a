//! ## innsim-core::occupancy
//! **Occupied rooms per calendar date**
//!
//! Counts only ever grow: there is no checkout event.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::catalog::Category;
use crate::ledger::Booking;

#[derive(Debug, Clone, Default)]
pub struct OccupancyCounter {
    by_date: BTreeMap<NaiveDate, u64>,
    by_category: [u64; 4],
}

impl OccupancyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one room occupied on every date the booking covers.
    /// Returns the number of room-days added.
    pub fn record(&mut self, booking: &Booking) -> u64 {
        let mut added = 0;
        for date in booking.occupied_dates() {
            *self.by_date.entry(date).or_default() += 1;
            added += 1;
        }
        self.by_category[booking.category.index()] += added;
        added
    }

    pub fn on(&self, date: NaiveDate) -> u64 {
        self.by_date.get(&date).copied().unwrap_or(0)
    }

    /// Room-days consumed by bookings of `category`.
    pub fn for_category(&self, category: Category) -> u64 {
        self.by_category[category.index()]
    }

    /// Sum over all dates.
    pub fn total(&self) -> u64 {
        self.by_date.values().sum()
    }
}
