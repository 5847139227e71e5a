//! ## innsim-simulator::report
//! **End-of-run occupancy statistics**
//!
//! The hotel-wide denominator is the number of rooms still *unbooked*
//! when the run ends, not the seeded inventory. A zero denominator makes
//! the affected figure unavailable instead of failing the report.

use innsim_core::catalog::Category;
use innsim_core::output::OutputLine;
use innsim_core::stats::{occupancy_percent, CategoryStatsMode, Percent};
use innsim_core::{Hotel, HotelError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOccupancy {
    pub category: Category,
    pub occupancy: Result<Percent, HotelError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyReport {
    pub num_days: u32,
    pub mode: CategoryStatsMode,
    pub total_rooms: u64,
    pub occupied_room_days: u64,
    pub overall: Result<Percent, HotelError>,
    pub categories: Vec<CategoryOccupancy>,
}

impl OccupancyReport {
    /// Report lines in output order, all tagged neutral.
    pub fn lines(&self) -> Vec<OutputLine> {
        let mut lines = vec![
            OutputLine::neutral(""),
            OutputLine::neutral("Hotel occupancy statistics:"),
            OutputLine::neutral(format!("Total rooms: {}", self.total_rooms)),
            OutputLine::neutral(format!("Occupied room-days: {}", self.occupied_room_days)),
            OutputLine::neutral(format!("Occupancy: {}", render(&self.overall))),
            OutputLine::neutral(""),
            OutputLine::neutral("Occupancy by category:"),
        ];
        lines.extend(self.categories.iter().map(|c| {
            OutputLine::neutral(format!("{}: {}", c.category, render(&c.occupancy)))
        }));
        lines
    }
}

fn render(figure: &Result<Percent, HotelError>) -> String {
    match figure {
        Ok(percent) => percent.to_string(),
        Err(err) => err.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsReporter {
    mode: CategoryStatsMode,
}

impl StatisticsReporter {
    pub fn new(mode: CategoryStatsMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CategoryStatsMode {
        self.mode
    }

    pub fn report(&self, num_days: u32, hotel: &Hotel) -> OccupancyReport {
        let catalog = hotel.catalog();
        let occupancy = hotel.occupancy();

        let total_rooms = catalog.total_available();
        let occupied_room_days = occupancy.total();

        let categories = catalog
            .iter()
            .map(|room| {
                let figure = match self.mode {
                    CategoryStatsMode::Literal => occupancy_percent(
                        occupied_room_days,
                        u64::from(room.available()),
                        num_days,
                    ),
                    CategoryStatsMode::ByCategory => occupancy_percent(
                        occupancy.for_category(room.category()),
                        u64::from(room.inventory()),
                        num_days,
                    ),
                };
                CategoryOccupancy {
                    category: room.category(),
                    occupancy: figure,
                }
            })
            .collect();

        OccupancyReport {
            num_days,
            mode: self.mode,
            total_rooms,
            occupied_room_days,
            overall: occupancy_percent(occupied_room_days, total_rooms, num_days),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn booked_hotel() -> Hotel {
        let at = NaiveDate::from_ymd_opt(2024, 4, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let mut hotel = Hotel::new(2);
        hotel.book(Category::Single, at, &mut rng);
        hotel.book(Category::Single, at, &mut rng);
        hotel.book(Category::Suite, at, &mut rng);
        while hotel.check_in(&mut rng).is_some() {}
        hotel
    }

    #[test]
    fn test_literal_mode_uses_unfiltered_total() {
        let hotel = booked_hotel();
        let occupied = hotel.occupancy().total();
        let report = StatisticsReporter::new(CategoryStatsMode::Literal).report(10, &hotel);

        // 8 seeded, 3 booked.
        assert_eq!(report.total_rooms, 5);
        assert_eq!(report.occupied_room_days, occupied);
        assert_eq!(
            report.overall,
            Ok(Percent(occupied as f64 / 50.0 * 100.0))
        );

        let single = &report.categories[Category::Single.index()];
        assert!(matches!(
            single.occupancy,
            Err(HotelError::StatisticsUnavailable(_))
        ));
        let double = &report.categories[Category::Double.index()];
        assert_eq!(
            double.occupancy,
            Ok(Percent(occupied as f64 / 20.0 * 100.0))
        );
        let suite = &report.categories[Category::Suite.index()];
        assert_eq!(
            suite.occupancy,
            Ok(Percent(occupied as f64 / 10.0 * 100.0))
        );
    }

    #[test]
    fn test_by_category_mode_filters() {
        let hotel = booked_hotel();
        let report = StatisticsReporter::new(CategoryStatsMode::ByCategory).report(10, &hotel);

        for entry in &report.categories {
            let own = hotel.occupancy().for_category(entry.category);
            assert_eq!(entry.occupancy, Ok(Percent(own as f64 / 20.0 * 100.0)));
        }
        assert_eq!(
            report.categories[Category::Double.index()].occupancy,
            Ok(Percent(0.0))
        );
    }

    #[test]
    fn test_zero_days_report() {
        let hotel = Hotel::new(20);
        let report = StatisticsReporter::default().report(0, &hotel);
        assert_eq!(report.occupied_room_days, 0);
        assert_eq!(report.total_rooms, 80);
        assert!(report.overall.is_err());

        let lines = report.lines();
        assert!(lines
            .iter()
            .any(|l| l.text == "Occupancy: Statistics unavailable: empty simulation window"));
    }

    #[test]
    fn test_report_lines() {
        let hotel = Hotel::new(1);
        let report = StatisticsReporter::default().report(4, &hotel);
        let text: Vec<_> = report.lines().into_iter().map(|l| l.text).collect();
        assert_eq!(
            text,
            vec![
                "",
                "Hotel occupancy statistics:",
                "Total rooms: 4",
                "Occupied room-days: 0",
                "Occupancy: 0.00%",
                "",
                "Occupancy by category:",
                "single: 0.00%",
                "junior suite: 0.00%",
                "double: 0.00%",
                "suite: 0.00%",
            ]
        );
    }
}
