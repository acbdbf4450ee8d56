use application::transfer::CarDto;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kernel::prelude::entity::{CarCategory, CarStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

use crate::controller::Exhaust;

/// A car as the front end reads it, with the rental API's field names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    #[serde(rename = "_id")]
    id: String,
    car_name: String,
    description: String,
    category: CarCategory,
    rent_price: Decimal,
    location: String,
    #[serde(rename = "imageURL")]
    image_url: String,
    provider_name: String,
    provider_email: String,
    status: CarStatus,
    #[serde(with = "time::serde::rfc3339")]
    date_added: OffsetDateTime,
}

impl From<CarDto> for CarResponse {
    fn from(value: CarDto) -> Self {
        Self {
            id: value.id,
            car_name: value.name,
            description: value.description,
            category: value.category,
            rent_price: value.rent_price,
            location: value.location,
            image_url: value.image_url,
            provider_name: value.provider_name,
            provider_email: value.provider_email,
            status: value.status,
            date_added: value.created_at,
        }
    }
}

impl IntoResponse for CarResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug)]
pub struct CreatedResponse(CarResponse);

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<CarDto> for Presenter {
    type To = CreatedResponse;
    fn emit(&self, input: CarDto) -> Self::To {
        CreatedResponse(input.into())
    }
}

impl Exhaust<Option<CarDto>> for Presenter {
    type To = Option<CarResponse>;
    fn emit(&self, input: Option<CarDto>) -> Self::To {
        input.map(CarResponse::from)
    }
}

impl Exhaust<Vec<CarDto>> for Presenter {
    type To = Json<Vec<CarResponse>>;
    fn emit(&self, input: Vec<CarDto>) -> Self::To {
        Json(input.into_iter().map(CarResponse::from).collect())
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
