//! ## innsim-core::hotel
//! **Hotel state and the two event handlers**
//!
//! `Hotel` owns the catalog, the ledger and the occupancy counter. Both
//! handlers are plain state transitions: they draw what they need from
//! the caller's generator and report what happened, leaving message
//! rendering to the caller.

use chrono::NaiveDateTime;
use rand::Rng;
use tracing::{trace, warn};

use crate::catalog::{Category, RoomCatalog};
use crate::ledger::{Booking, BookingLedger, ConfirmationCode, MAX_STAY_DAYS, MIN_STAY_DAYS};
use crate::occupancy::OccupancyCounter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed(Booking),
    SoldOut {
        category: Category,
        at: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub booking: Booking,
    /// Room-days added to the occupancy counter.
    pub room_days: u64,
}

#[derive(Debug, Clone)]
pub struct Hotel {
    catalog: RoomCatalog,
    ledger: BookingLedger,
    occupancy: OccupancyCounter,
}

impl Hotel {
    /// A hotel with `rooms_per_category` rooms in each of the four categories.
    pub fn new(rooms_per_category: u32) -> Self {
        Self {
            catalog: RoomCatalog::new(rooms_per_category),
            ledger: BookingLedger::new(),
            occupancy: OccupancyCounter::new(),
        }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    pub fn occupancy(&self) -> &OccupancyCounter {
        &self.occupancy
    }

    /// Handles a booking request for a uniformly chosen category.
    pub fn request_booking<R: Rng + ?Sized>(
        &mut self,
        at: NaiveDateTime,
        rng: &mut R,
    ) -> BookingOutcome {
        let category = Category::random(rng);
        self.book(category, at, rng)
    }

    /// Books one room of `category`. No other category is tried when it
    /// is sold out.
    pub fn book<R: Rng + ?Sized>(
        &mut self,
        category: Category,
        at: NaiveDateTime,
        rng: &mut R,
    ) -> BookingOutcome {
        if self.catalog.try_reserve(category).is_err() {
            return BookingOutcome::SoldOut { category, at };
        }

        let booking = Booking {
            code: ConfirmationCode::generate(rng),
            category,
            check_in: at,
            duration_days: rng.random_range(MIN_STAY_DAYS..=MAX_STAY_DAYS),
        };
        trace!(code = %booking.code, %category, "Booking stored");

        if let Some(previous) = self.ledger.insert(booking.clone()) {
            warn!(
                code = %previous.code,
                replaced = %previous.category,
                "Confirmation code collision, earlier booking overwritten"
            );
        }
        BookingOutcome::Confirmed(booking)
    }

    /// Consumes one random booking and marks its dates occupied.
    /// Returns `None` without touching state when the ledger is empty.
    pub fn check_in<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CheckIn> {
        let booking = self.ledger.take_random(rng)?;
        let room_days = self.occupancy.record(&booking);
        Some(CheckIn { booking, room_days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_single_room_exhausted() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut hotel = Hotel::new(1);

        let first = hotel.book(Category::Suite, noon(), &mut rng);
        assert!(matches!(first, BookingOutcome::Confirmed(_)));
        assert_eq!(hotel.catalog().get(Category::Suite).available(), 0);

        let second = hotel.book(Category::Suite, noon(), &mut rng);
        assert_eq!(
            second,
            BookingOutcome::SoldOut {
                category: Category::Suite,
                at: noon()
            }
        );
        assert_eq!(hotel.catalog().get(Category::Suite).available(), 0);
        assert_eq!(hotel.ledger().len(), 1);
    }

    #[test]
    fn test_check_in_on_empty_ledger_is_noop() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut hotel = Hotel::new(3);
        assert!(hotel.check_in(&mut rng).is_none());
        assert_eq!(hotel.occupancy().total(), 0);
        assert_eq!(hotel.catalog().total_available(), 12);
    }

    #[test]
    fn test_check_in_does_not_restore_inventory() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut hotel = Hotel::new(2);
        hotel.book(Category::Single, noon(), &mut rng);
        let check_in = hotel.check_in(&mut rng).unwrap();

        assert_eq!(check_in.booking.category, Category::Single);
        assert_eq!(hotel.catalog().get(Category::Single).available(), 1);
        assert!(hotel.ledger().is_empty());
    }

    proptest! {
        #[test]
        fn test_inventory_never_negative(
            seed in any::<u64>(),
            rooms in 0u32..4,
            picks in prop::collection::vec(0usize..4, 0..64),
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut hotel = Hotel::new(rooms);
            let mut confirmed = [0u32; 4];

            for pick in picks {
                let category = Category::ALL[pick];
                if let BookingOutcome::Confirmed(b) = hotel.book(category, noon(), &mut rng) {
                    prop_assert!((MIN_STAY_DAYS..=MAX_STAY_DAYS).contains(&b.duration_days));
                    confirmed[category.index()] += 1;
                }
            }

            for room in hotel.catalog().iter() {
                prop_assert!(room.available() <= rooms);
                prop_assert_eq!(room.reserved(), confirmed[room.category().index()]);
            }
        }

        #[test]
        fn test_check_in_adds_exact_duration(seed in any::<u64>(), bookings in 1usize..20) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut hotel = Hotel::new(50);
            for _ in 0..bookings {
                hotel.request_booking(noon(), &mut rng);
            }

            while !hotel.ledger().is_empty() {
                let before = hotel.occupancy().total();
                let pending = hotel.ledger().len();
                let check_in = hotel.check_in(&mut rng).unwrap();
                let span = check_in.booking.occupied_dates().count() as u64;

                prop_assert_eq!(hotel.occupancy().total() - before, check_in.room_days);
                prop_assert_eq!(check_in.room_days, u64::from(check_in.booking.duration_days));
                prop_assert_eq!(span, check_in.room_days);
                prop_assert_eq!(hotel.ledger().len(), pending - 1);
                prop_assert!(!hotel.ledger().contains(&check_in.booking.code));
            }
        }
    }
}
