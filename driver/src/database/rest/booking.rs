use kernel::interface::query::BookingQuery;
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{
    calendar_date, Booking, BookingId, BookingStatus, CarId, CreatedOn, NewBooking,
    RentalPeriod, TotalDays, TotalPrice, UserEmail, UserId,
};
use kernel::KernelError;
use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::database::rest::{ensure_success, InsertedRecord, RestSession};
use crate::error::ConvertError;

pub struct RestBookingRepository;

#[async_trait::async_trait]
impl BookingQuery<RestSession> for RestBookingRepository {
    async fn find_by_renter(
        &self,
        con: &mut RestSession,
        renter_id: &UserId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        RestBookingInternal::find_by_renter(con, renter_id).await
    }
}

#[async_trait::async_trait]
impl BookingModifier<RestSession> for RestBookingRepository {
    async fn create(
        &self,
        con: &mut RestSession,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError> {
        RestBookingInternal::create(con, booking).await
    }

    async fn delete(
        &self,
        con: &mut RestSession,
        id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        RestBookingInternal::delete(con, id).await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRecord {
    #[serde(rename = "_id")]
    id: String,
    car_id: String,
    renter_id: String,
    #[serde(default)]
    renter_email: String,
    #[serde(with = "calendar_date")]
    start_date: Date,
    #[serde(with = "calendar_date")]
    end_date: Date,
    total_days: i64,
    total_price: Decimal,
    #[serde(default)]
    status: BookingStatus,
    #[serde(with = "calendar_date")]
    booking_date: Date,
}

impl From<BookingRecord> for Booking {
    fn from(value: BookingRecord) -> Self {
        Booking::new(
            BookingId::new(value.id),
            CarId::new(value.car_id),
            UserId::new(value.renter_id),
            UserEmail::new(value.renter_email),
            RentalPeriod::new(value.start_date, value.end_date),
            TotalDays::new(value.total_days),
            TotalPrice::new(value.total_price),
            value.status,
            CreatedOn::new(value.booking_date),
        )
    }
}

/// Totals are stored as plain JSON numbers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewBookingRecord<'a> {
    car_id: &'a String,
    renter_id: &'a String,
    renter_email: &'a String,
    #[serde(with = "calendar_date")]
    start_date: Date,
    #[serde(with = "calendar_date")]
    end_date: Date,
    total_days: i64,
    #[serde(with = "rust_decimal::serde::float")]
    total_price: Decimal,
    status: BookingStatus,
    #[serde(with = "calendar_date")]
    booking_date: Date,
}

impl<'a> From<&'a NewBooking> for NewBookingRecord<'a> {
    fn from(value: &'a NewBooking) -> Self {
        Self {
            car_id: value.car_id().as_ref(),
            renter_id: value.renter_id().as_ref(),
            renter_email: value.renter_email().as_ref(),
            start_date: value.period().start(),
            end_date: value.period().end(),
            total_days: *value.total_days().as_ref(),
            total_price: *value.total_price().as_ref(),
            status: *value.status(),
            booking_date: value.booking_date().date(),
        }
    }
}

pub(in crate::database) struct RestBookingInternal;

impl RestBookingInternal {
    async fn find_by_renter(
        con: &mut RestSession,
        renter_id: &UserId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let response = con
            .request(Method::GET, "/bookings")
            .query(&[("renterId", AsRef::<String>::as_ref(renter_id))])
            .send()
            .await
            .convert_error()?;
        let records = ensure_success(response)?
            .json::<Vec<BookingRecord>>()
            .await
            .convert_error()?;
        Ok(records.into_iter().map(Booking::from).collect())
    }

    async fn create(
        con: &mut RestSession,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError> {
        let response = con
            .request(Method::POST, "/bookings")
            .json(&NewBookingRecord::from(booking))
            .send()
            .await
            .convert_error()?;
        let inserted = ensure_success(response)?
            .json::<InsertedRecord>()
            .await
            .convert_error()?;
        Ok(BookingId::new(inserted.inserted_id))
    }

    async fn delete(con: &mut RestSession, id: &BookingId) -> error_stack::Result<(), KernelError> {
        let path = format!("/bookings/{}", AsRef::<String>::as_ref(id));
        let response = con
            .request(Method::DELETE, &path)
            .send()
            .await
            .convert_error()?;
        ensure_success(response)?;
        Ok(())
    }
}
