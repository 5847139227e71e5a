use serde::Serialize;
use thiserror::Error;

use crate::catalog::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum HotelError {
    #[error("No {0} rooms available")]
    SoldOut(Category),

    #[error("Statistics unavailable: {0}")]
    StatisticsUnavailable(String),

    #[error("Invalid confirmation code: {0}")]
    InvalidConfirmationCode(String),

    #[error("Simulated time out of range: {0}")]
    ClockOverflow(String),
}
