use kernel::prelude::calculator::BookingQuote;
use kernel::prelude::entity::{Booking, BookingPhase, BookingStatus, DestructBooking};
use rust_decimal::Decimal;
use time::{Date, UtcOffset};

use crate::transfer::{CarDto, UserDto};

#[derive(Debug, Clone)]
pub struct BookingDto {
    pub id: String,
    pub car_id: String,
    pub renter_id: String,
    pub renter_email: String,
    pub start_date: Date,
    pub end_date: Date,
    pub total_days: i64,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub booking_date: Date,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        let DestructBooking {
            id,
            car_id,
            renter_id,
            renter_email,
            period,
            total_days,
            total_price,
            status,
            booking_date,
        } = value.into_destruct();
        Self {
            id: id.into(),
            car_id: car_id.into(),
            renter_id: renter_id.into(),
            renter_email: renter_email.into(),
            start_date: period.start(),
            end_date: period.end(),
            total_days: total_days.into(),
            total_price: total_price.into(),
            status,
            booking_date: booking_date.date(),
        }
    }
}

/// A booking from the renter's history, with the booked car when it could be fetched.
#[derive(Debug, Clone)]
pub struct BookingDetailDto {
    pub booking: BookingDto,
    pub car: Option<CarDto>,
    pub phase: BookingPhase,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct QuoteDto {
    pub days: i64,
    pub total_price: Decimal,
}

impl From<BookingQuote> for QuoteDto {
    fn from(value: BookingQuote) -> Self {
        Self {
            days: *value.days().as_ref(),
            total_price: *value.total_price().as_ref(),
        }
    }
}

pub struct QuoteBookingDto {
    pub car_id: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

pub struct ConfirmBookingDto {
    pub user: UserDto,
    pub car_id: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Renter's offset from UTC; decides which day counts as today.
    pub utc_offset: Option<UtcOffset>,
}

pub struct CancelBookingDto {
    pub user: UserDto,
    pub booking_id: String,
    pub car_id: String,
}

pub struct GetRenterBookingsDto {
    pub user: UserDto,
}
