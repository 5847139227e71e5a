//! Text rendering of handler outcomes.

use innsim_core::hotel::{BookingOutcome, CheckIn};
use innsim_core::output::{OutputLine, Tone};

pub fn booking_line(outcome: &BookingOutcome) -> OutputLine {
    match outcome {
        BookingOutcome::Confirmed(booking) => OutputLine::new(
            Tone::Success,
            format!(
                "Booking confirmed for a {} room from {} for {} days. Confirmation code: {}",
                booking.category,
                booking.check_in_date(),
                booking.duration_days,
                booking.code
            ),
        ),
        BookingOutcome::SoldOut { category, at } => OutputLine::new(
            Tone::Failure,
            format!("No {} rooms available on {}.", category, at.date()),
        ),
    }
}

pub fn check_in_line(check_in: &CheckIn) -> OutputLine {
    let booking = &check_in.booking;
    OutputLine::new(
        Tone::Informational,
        format!(
            "Guest checked into a {} room on {} for {} days.",
            booking.category,
            booking.check_in_date(),
            booking.duration_days
        ),
    )
}
