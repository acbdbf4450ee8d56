use application::transfer::{BookingDetailDto, BookingDto, QuoteDto};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kernel::prelude::entity::{calendar_date, BookingPhase, BookingStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use time::Date;

use crate::controller::Exhaust;
use crate::route::car::response::CarResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(rename = "_id")]
    id: String,
    car_id: String,
    renter_id: String,
    renter_email: String,
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

impl From<BookingDto> for BookingResponse {
    fn from(value: BookingDto) -> Self {
        Self {
            id: value.id,
            car_id: value.car_id,
            renter_id: value.renter_id,
            renter_email: value.renter_email,
            start_date: value.start_date,
            end_date: value.end_date,
            total_days: value.total_days,
            total_price: value.total_price,
            status: value.status,
            booking_date: value.booking_date,
        }
    }
}

/// A history entry. `car` is null when the car could not be fetched.
#[derive(Debug, Serialize)]
pub struct BookingDetailResponse {
    #[serde(flatten)]
    booking: BookingResponse,
    car: Option<CarResponse>,
    phase: BookingPhase,
}

impl From<BookingDetailDto> for BookingDetailResponse {
    fn from(value: BookingDetailDto) -> Self {
        Self {
            booking: value.booking.into(),
            car: value.car.map(CarResponse::from),
            phase: value.phase,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    days: i64,
    #[serde(with = "rust_decimal::serde::float")]
    total_price: Decimal,
}

#[derive(Debug)]
pub struct CreatedResponse(BookingResponse);

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<QuoteDto> for Presenter {
    type To = Json<QuoteResponse>;
    fn emit(&self, input: QuoteDto) -> Self::To {
        Json(QuoteResponse {
            days: input.days,
            total_price: input.total_price,
        })
    }
}

impl Exhaust<BookingDto> for Presenter {
    type To = CreatedResponse;
    fn emit(&self, input: BookingDto) -> Self::To {
        CreatedResponse(input.into())
    }
}

impl Exhaust<Vec<BookingDetailDto>> for Presenter {
    type To = Json<Vec<BookingDetailResponse>>;
    fn emit(&self, input: Vec<BookingDetailDto>) -> Self::To {
        Json(input.into_iter().map(BookingDetailResponse::from).collect())
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{BookingDetailDto, BookingDto};
    use kernel::prelude::entity::{BookingPhase, BookingStatus};
    use rust_decimal::Decimal;
    use time::macros::date;

    use super::BookingDetailResponse;

    #[test]
    fn history_entry_without_car_is_flat() {
        let detail = BookingDetailDto {
            booking: BookingDto {
                id: "6660aa01b4d5e6f708091a30".to_string(),
                car_id: "car-1".to_string(),
                renter_id: "uid-1".to_string(),
                renter_email: "renter@example.com".to_string(),
                start_date: date!(2025 - 06 - 01),
                end_date: date!(2025 - 06 - 04),
                total_days: 3,
                total_price: Decimal::from(15000),
                status: BookingStatus::Confirmed,
                booking_date: date!(2025 - 05 - 30),
            },
            car: None,
            phase: BookingPhase::Upcoming,
        };
        let value = serde_json::to_value(BookingDetailResponse::from(detail)).unwrap();
        assert_eq!(value["_id"], "6660aa01b4d5e6f708091a30");
        assert_eq!(value["startDate"], "2025-06-01");
        assert_eq!(value["totalDays"], 3);
        assert_eq!(value["totalPrice"], 15000.0);
        assert_eq!(value["status"], "Confirmed");
        assert_eq!(value["phase"], "Upcoming");
        assert!(value["car"].is_null());
    }
}
