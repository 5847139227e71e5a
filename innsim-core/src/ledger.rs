//! ## innsim-core::ledger
//! **Open bookings keyed by confirmation code**
//!
//! Codes are random and not checked for uniqueness; inserting a booking
//! under a code that is already present replaces the older booking.
//! Entries live in an ordered map so that picking the n-th entry with a
//! seeded generator gives the same booking on every run.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Serialize, Serializer};

use crate::catalog::Category;
use crate::error::HotelError;

pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";
pub const CODE_LEN: usize = 6;

pub const MIN_STAY_DAYS: u32 = 1;
pub const MAX_STAY_DAYS: u32 = 7;

/// Six characters from `[A-Z0-9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfirmationCode([u8; CODE_LEN]);

impl ConfirmationCode {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut code = [0u8; CODE_LEN];
        for slot in code.iter_mut() {
            *slot = CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())];
        }
        Self(code)
    }
}

impl fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.0.iter().try_for_each(|b| f.write_char(char::from(*b)))
    }
}

impl FromStr for ConfirmationCode {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; CODE_LEN] = s
            .as_bytes()
            .try_into()
            .map_err(|_| HotelError::InvalidConfirmationCode(s.to_string()))?;
        if !bytes.iter().all(|b| CODE_ALPHABET.contains(b)) {
            return Err(HotelError::InvalidConfirmationCode(s.to_string()));
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ConfirmationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub code: ConfirmationCode,
    pub category: Category,
    /// Simulated time at which the booking was made.
    pub check_in: NaiveDateTime,
    pub duration_days: u32,
}

impl Booking {
    pub fn check_in_date(&self) -> NaiveDate {
        self.check_in.date()
    }

    /// The `duration_days` consecutive dates starting at the check-in date.
    pub fn occupied_dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.check_in_date()
            .iter_days()
            .take(self.duration_days as usize)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    entries: BTreeMap<ConfirmationCode, Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `booking`, returning whatever booking held the same code before.
    pub fn insert(&mut self, booking: Booking) -> Option<Booking> {
        self.entries.insert(booking.code, booking)
    }

    pub fn contains(&self, code: &ConfirmationCode) -> bool {
        self.entries.contains_key(code)
    }

    /// Removes and returns one booking chosen uniformly among all entries,
    /// regardless of its check-in date.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Booking> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.entries.len());
        let code = *self.entries.keys().nth(index)?;
        self.entries.remove(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.entries.values()
    }
}
