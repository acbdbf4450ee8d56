use serde::Serialize;
use time::Date;

use crate::entity::RentalPeriod;

/// Where a booking stands relative to today. Derived on read, never stored.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum BookingPhase {
    Upcoming,
    Active,
    Completed,
}

impl BookingPhase {
    pub fn of(period: &RentalPeriod, today: Date) -> Self {
        if today < period.start() {
            BookingPhase::Upcoming
        } else if today <= period.end() {
            BookingPhase::Active
        } else {
            BookingPhase::Completed
        }
    }
}
