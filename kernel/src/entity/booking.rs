mod id;
mod period;
mod phase;
mod status;
mod total;

pub use self::{id::*, period::*, phase::*, status::*, total::*};
use crate::entity::common::CreatedOn;
use crate::entity::{CarId, UserEmail, UserId};
use destructure::Destructure;
use time::Date;
use vodca::References;

/// A confirmed reservation of a car for a rental period.
///
/// `total_days` and `total_price` are fixed when the booking is made and are
/// never recomputed from the car's current rate.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    car_id: CarId,
    renter_id: UserId,
    renter_email: UserEmail,
    period: RentalPeriod,
    total_days: TotalDays,
    total_price: TotalPrice,
    status: BookingStatus,
    booking_date: CreatedOn<Booking>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookingId,
        car_id: CarId,
        renter_id: UserId,
        renter_email: UserEmail,
        period: RentalPeriod,
        total_days: TotalDays,
        total_price: TotalPrice,
        status: BookingStatus,
        booking_date: CreatedOn<Booking>,
    ) -> Self {
        Self {
            id,
            car_id,
            renter_id,
            renter_email,
            period,
            total_days,
            total_price,
            status,
            booking_date,
        }
    }

    pub fn phase(&self, today: Date) -> BookingPhase {
        BookingPhase::of(&self.period, today)
    }
}

/// A booking about to be sent to the rental API, which assigns its id.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct NewBooking {
    car_id: CarId,
    renter_id: UserId,
    renter_email: UserEmail,
    period: RentalPeriod,
    total_days: TotalDays,
    total_price: TotalPrice,
    status: BookingStatus,
    booking_date: CreatedOn<Booking>,
}

impl NewBooking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        car_id: CarId,
        renter_id: UserId,
        renter_email: UserEmail,
        period: RentalPeriod,
        total_days: TotalDays,
        total_price: TotalPrice,
        status: BookingStatus,
        booking_date: CreatedOn<Booking>,
    ) -> Self {
        Self {
            car_id,
            renter_id,
            renter_email,
            period,
            total_days,
            total_price,
            status,
            booking_date,
        }
    }

    pub fn into_booking(self, id: BookingId) -> Booking {
        Booking::new(
            id,
            self.car_id,
            self.renter_id,
            self.renter_email,
            self.period,
            self.total_days,
            self.total_price,
            self.status,
            self.booking_date,
        )
    }
}
