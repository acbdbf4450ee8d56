//! Pricing and validation rules for a proposed booking.
//!
//! Everything here is pure: the current day is handed in by the caller.

use time::Date;
use vodca::References;

use crate::entity::{RentPrice, RentalPeriod, TotalDays, TotalPrice, UserEmail};
use crate::BookingRejection;

/// Duration and price of a rental period at a given daily rate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, References)]
pub struct BookingQuote {
    days: TotalDays,
    total_price: TotalPrice,
}

impl BookingQuote {
    pub fn new(days: TotalDays, total_price: TotalPrice) -> Self {
        Self { days, total_price }
    }

    pub fn empty() -> Self {
        Self::new(TotalDays::new(0), TotalPrice::zero())
    }

    pub fn is_empty(&self) -> bool {
        *self.days.as_ref() == 0
    }
}

/// A booking request that passed every rule, with its period and price.
#[derive(Debug, Clone, Copy, Eq, PartialEq, References)]
pub struct ValidatedBooking {
    period: RentalPeriod,
    quote: BookingQuote,
}

/// Days between `start` and `end` and the matching price.
///
/// An empty or inverted range yields zero days at zero price rather than an error.
/// A price too large to represent is refused with [`BookingRejection::PriceOutOfRange`].
pub fn compute_booking(
    start: Date,
    end: Date,
    daily_rate: &RentPrice,
) -> Result<BookingQuote, BookingRejection> {
    let days = RentalPeriod::new(start, end).days();
    if days <= 0 {
        return Ok(BookingQuote::empty());
    }
    let days = TotalDays::new(days);
    let total_price =
        TotalPrice::of(&days, daily_rate).ok_or(BookingRejection::PriceOutOfRange)?;
    Ok(BookingQuote::new(days, total_price))
}

/// Same as [`compute_booking`], treating a missing date as an empty range.
pub fn preview_booking(
    start: Option<Date>,
    end: Option<Date>,
    daily_rate: &RentPrice,
) -> Result<BookingQuote, BookingRejection> {
    match (start, end) {
        (Some(start), Some(end)) => compute_booking(start, end, daily_rate),
        _ => Ok(BookingQuote::empty()),
    }
}

/// Checks a booking request. Rules are applied in order and the first failure is returned:
/// self-booking, missing dates, start before `today`, end not after start, then an
/// unrepresentable price.
pub fn validate_booking(
    renter_email: &UserEmail,
    provider_email: &UserEmail,
    start: Option<Date>,
    end: Option<Date>,
    daily_rate: &RentPrice,
    today: Date,
) -> Result<ValidatedBooking, BookingRejection> {
    if renter_email == provider_email {
        return Err(BookingRejection::SelfBookingNotAllowed);
    }
    let (Some(start), Some(end)) = (start, end) else {
        return Err(BookingRejection::MissingDates);
    };
    if start < today {
        return Err(BookingRejection::StartDateInPast);
    }
    if end <= start {
        return Err(BookingRejection::InvalidDateRange);
    }
    Ok(ValidatedBooking {
        period: RentalPeriod::new(start, end),
        quote: compute_booking(start, end, daily_rate)?,
    })
}
