//! ## innsim-core::catalog
//! **Fixed room categories with remaining inventory**
//!
//! The category set is closed: every catalog holds exactly the four
//! categories in [`Category::ALL`], so a random pick can never miss.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::HotelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Single,
    JuniorSuite,
    Double,
    Suite,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Single,
        Category::JuniorSuite,
        Category::Double,
        Category::Suite,
    ];

    /// Position of the category inside [`Category::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Single => "single",
            Category::JuniorSuite => "junior suite",
            Category::Double => "double",
            Category::Suite => "suite",
        }
    }

    /// Guests per room.
    pub const fn capacity(self) -> u32 {
        match self {
            Category::Single => 1,
            Category::JuniorSuite => 2,
            Category::Double => 2,
            Category::Suite => 3,
        }
    }

    /// Nightly price in whole currency units.
    pub const fn price(self) -> u32 {
        match self {
            Category::Single => 70,
            Category::JuniorSuite => 90,
            Category::Double => 100,
            Category::Suite => 120,
        }
    }

    /// Picks a category uniformly, independent of demand or occupancy.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One room category and how many of its rooms are still bookable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomCategory {
    category: Category,
    capacity: u32,
    price: u32,
    /// Rooms left to book. Only ever decremented, never above `inventory`.
    available: u32,
    inventory: u32,
}

impl RoomCategory {
    pub fn new(category: Category, count: u32) -> Self {
        Self {
            category,
            capacity: category.capacity(),
            price: category.price(),
            available: count,
            inventory: count,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    /// Rooms the category was seeded with.
    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    /// Rooms taken by confirmed bookings so far.
    pub fn reserved(&self) -> u32 {
        self.inventory - self.available
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: capacity {}, price {}, available {}",
            self.category, self.capacity, self.price, self.available
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomCatalog {
    rooms: [RoomCategory; 4],
}

impl RoomCatalog {
    /// Seeds every category with `rooms_per_category` rooms.
    pub fn new(rooms_per_category: u32) -> Self {
        Self {
            rooms: Category::ALL.map(|category| RoomCategory::new(category, rooms_per_category)),
        }
    }

    pub fn get(&self, category: Category) -> &RoomCategory {
        &self.rooms[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomCategory> {
        self.rooms.iter()
    }

    /// Takes one room out of `category`, refusing when none remain.
    pub fn try_reserve(&mut self, category: Category) -> Result<(), HotelError> {
        let room = &mut self.rooms[category.index()];
        if room.available == 0 {
            return Err(HotelError::SoldOut(category));
        }
        room.available -= 1;
        Ok(())
    }

    /// Sum of remaining rooms over all categories.
    pub fn total_available(&self) -> u64 {
        self.rooms.iter().map(|r| u64::from(r.available)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_seeding() {
        let catalog = RoomCatalog::new(20);
        assert_eq!(catalog.iter().count(), 4);
        assert_eq!(catalog.total_available(), 80);

        let suite = catalog.get(Category::Suite);
        assert_eq!(suite.capacity(), 3);
        assert_eq!(suite.price(), 120);
        assert_eq!(suite.inventory(), 20);
    }

    #[test]
    fn test_reserve_until_sold_out() {
        let mut catalog = RoomCatalog::new(1);
        assert!(catalog.try_reserve(Category::Double).is_ok());
        assert_eq!(
            catalog.try_reserve(Category::Double),
            Err(HotelError::SoldOut(Category::Double))
        );
        assert_eq!(catalog.get(Category::Double).available(), 0);
        assert_eq!(catalog.get(Category::Double).reserved(), 1);
        // Other categories are untouched.
        assert_eq!(catalog.get(Category::Single).available(), 1);
    }

    #[test]
    fn test_random_category_covers_all() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[Category::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_reserved_tracks_inventory() {
        let mut catalog = RoomCatalog::new(3);
        catalog.try_reserve(Category::Single).unwrap();
        catalog.try_reserve(Category::Single).unwrap();
        let single = catalog.get(Category::Single);
        assert_eq!(single.available(), 1);
        assert_eq!(single.inventory(), 3);
        assert_eq!(single.reserved(), 2);
        assert!(single.available() <= single.inventory());
    }

    #[test]
    fn test_display() {
        let room = RoomCategory::new(Category::JuniorSuite, 3);
        assert_eq!(
            room.to_string(),
            "junior suite: capacity 2, price 90, available 3"
        );
    }
}
