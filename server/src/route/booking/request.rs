use application::transfer::{
    CancelBookingDto, ConfirmBookingDto, GetRenterBookingsDto, QuoteBookingDto,
};
use kernel::prelude::entity::calendar_date;
use serde::{Deserialize, Deserializer};
use time::{Date, UtcOffset};

use crate::controller::Intake;
use crate::extract::CurrentUser;

/// Dates picked so far on the booking form. Either may still be empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, with = "calendar_date::option")]
    start_date: Option<Date>,
    #[serde(default, with = "calendar_date::option")]
    end_date: Option<Date>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    car_id: String,
    #[serde(default, with = "calendar_date::option")]
    start_date: Option<Date>,
    #[serde(default, with = "calendar_date::option")]
    end_date: Option<Date>,
    /// Browser's `Date.getTimezoneOffset()`: minutes *behind* UTC.
    #[serde(default, deserialize_with = "timezone_offset")]
    timezone_offset: Option<UtcOffset>,
}

fn timezone_offset<'de, D: Deserializer<'de>>(de: D) -> Result<Option<UtcOffset>, D::Error> {
    let Some(minutes) = Option::<i32>::deserialize(de)? else {
        return Ok(None);
    };
    let seconds = minutes
        .checked_mul(-60)
        .ok_or_else(|| serde::de::Error::custom("timezoneOffset out of range"))?;
    UtcOffset::from_whole_seconds(seconds)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelQuery {
    car_id: String,
}

#[derive(Debug)]
pub struct CancelRequest {
    user: CurrentUser,
    booking_id: String,
    query: CancelQuery,
}

impl CancelRequest {
    pub fn new(user: CurrentUser, booking_id: String, query: CancelQuery) -> Self {
        Self {
            user,
            booking_id,
            query,
        }
    }
}

pub struct Transformer;

impl Intake<(String, QuoteRequest)> for Transformer {
    type To = QuoteBookingDto;
    fn emit(&self, input: (String, QuoteRequest)) -> Self::To {
        let (car_id, request) = input;
        QuoteBookingDto {
            car_id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

impl Intake<(CurrentUser, CreateRequest)> for Transformer {
    type To = ConfirmBookingDto;
    fn emit(&self, input: (CurrentUser, CreateRequest)) -> Self::To {
        let (CurrentUser(user), request) = input;
        ConfirmBookingDto {
            user,
            car_id: request.car_id,
            start_date: request.start_date,
            end_date: request.end_date,
            utc_offset: request.timezone_offset,
        }
    }
}

impl Intake<CancelRequest> for Transformer {
    type To = CancelBookingDto;
    fn emit(&self, input: CancelRequest) -> Self::To {
        CancelBookingDto {
            user: input.user.0,
            booking_id: input.booking_id,
            car_id: input.query.car_id,
        }
    }
}

impl Intake<CurrentUser> for Transformer {
    type To = GetRenterBookingsDto;
    fn emit(&self, input: CurrentUser) -> Self::To {
        GetRenterBookingsDto { user: input.0 }
    }
}
