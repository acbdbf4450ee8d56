use kernel::interface::query::CarQuery;
use kernel::interface::update::CarModifier;
use kernel::prelude::entity::{
    Car, CarCategory, CarDescription, CarId, CarImageUrl, CarLocation, CarName, CarProfile,
    CarStatus, CreatedAt, NewCar, RentPrice, UserEmail, UserName,
};
use kernel::KernelError;
use reqwest::{Method, StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database::rest::{ensure_success, InsertedRecord, RestSession};
use crate::error::ConvertError;

pub struct RestCarRepository;

#[async_trait::async_trait]
impl CarQuery<RestSession> for RestCarRepository {
    async fn find_by_id(
        &self,
        con: &mut RestSession,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        RestCarInternal::find_by_id(con, id).await
    }

    async fn find_all(&self, con: &mut RestSession) -> error_stack::Result<Vec<Car>, KernelError> {
        RestCarInternal::find(con, None).await
    }

    async fn find_by_provider(
        &self,
        con: &mut RestSession,
        provider_email: &UserEmail,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        RestCarInternal::find(con, Some(provider_email)).await
    }
}

#[async_trait::async_trait]
impl CarModifier<RestSession> for RestCarRepository {
    async fn create(
        &self,
        con: &mut RestSession,
        car: &NewCar,
    ) -> error_stack::Result<CarId, KernelError> {
        RestCarInternal::create(con, car).await
    }

    async fn update(
        &self,
        con: &mut RestSession,
        id: &CarId,
        profile: &CarProfile,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError> {
        RestCarInternal::update(con, id, profile, status).await
    }

    async fn update_status(
        &self,
        con: &mut RestSession,
        id: &CarId,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError> {
        RestCarInternal::update_status(con, id, status).await
    }

    async fn delete(&self, con: &mut RestSession, id: &CarId) -> error_stack::Result<(), KernelError> {
        RestCarInternal::delete(con, id).await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarRecord {
    #[serde(rename = "_id")]
    id: String,
    car_name: String,
    #[serde(default)]
    description: String,
    category: CarCategory,
    rent_price: Decimal,
    #[serde(default)]
    location: String,
    #[serde(rename = "imageURL", default)]
    image_url: String,
    #[serde(default)]
    provider_name: Option<String>,
    provider_email: String,
    #[serde(default)]
    status: CarStatus,
    #[serde(with = "time::serde::rfc3339")]
    date_added: OffsetDateTime,
}

impl From<CarRecord> for Car {
    fn from(value: CarRecord) -> Self {
        Car::new(
            CarId::new(value.id),
            CarProfile::new(
                CarName::new(value.car_name),
                CarDescription::new(value.description),
                value.category,
                RentPrice::new(value.rent_price),
                CarLocation::new(value.location),
                CarImageUrl::new(value.image_url),
            ),
            value.provider_name.map(UserName::new).unwrap_or_default(),
            UserEmail::new(value.provider_email),
            value.status,
            CreatedAt::new(value.date_added),
        )
    }
}

/// Editable fields as the API names them. Rent price goes out as a string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord<'a> {
    car_name: &'a String,
    description: &'a String,
    category: CarCategory,
    rent_price: Decimal,
    location: &'a String,
    #[serde(rename = "imageURL")]
    image_url: &'a String,
}

impl<'a> From<&'a CarProfile> for ProfileRecord<'a> {
    fn from(value: &'a CarProfile) -> Self {
        Self {
            car_name: value.name().as_ref(),
            description: value.description().as_ref(),
            category: *value.category(),
            rent_price: *value.rent_price().as_ref(),
            location: value.location().as_ref(),
            image_url: value.image_url().as_ref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewCarRecord<'a> {
    #[serde(flatten)]
    profile: ProfileRecord<'a>,
    provider_name: &'a String,
    provider_email: &'a String,
    status: CarStatus,
    #[serde(with = "time::serde::rfc3339")]
    date_added: OffsetDateTime,
}

impl<'a> From<&'a NewCar> for NewCarRecord<'a> {
    fn from(value: &'a NewCar) -> Self {
        Self {
            profile: ProfileRecord::from(value.profile()),
            provider_name: value.provider_name().as_ref(),
            provider_email: value.provider_email().as_ref(),
            status: *value.status(),
            date_added: value.created_at().time(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCarRecord<'a> {
    #[serde(flatten)]
    profile: ProfileRecord<'a>,
    status: CarStatus,
}

#[derive(Debug, Serialize)]
struct StatusRecord {
    status: CarStatus,
}

pub(in crate::database) struct RestCarInternal;

impl RestCarInternal {
    fn path(id: &CarId) -> String {
        format!("/cars/{}", AsRef::<String>::as_ref(id))
    }

    async fn find_by_id(
        con: &mut RestSession,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        let response = con
            .request(Method::GET, &Self::path(id))
            .send()
            .await
            .convert_error()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let record = ensure_success(response)?
            .json::<Option<CarRecord>>()
            .await
            .convert_error()?;
        Ok(record.map(Car::from))
    }

    async fn find(
        con: &mut RestSession,
        provider_email: Option<&UserEmail>,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let mut request = con.request(Method::GET, "/cars");
        if let Some(email) = provider_email {
            request = request.query(&[("email", AsRef::<String>::as_ref(email))]);
        }
        let records = ensure_success(request.send().await.convert_error()?)?
            .json::<Vec<serde_json::Value>>()
            .await
            .convert_error()?;
        // one malformed listing must not hide the rest
        let cars = records
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<CarRecord>(value) {
                Ok(record) => Some(Car::from(record)),
                Err(error) => {
                    tracing::warn!(%error, "skipping undecodable car record");
                    None
                }
            })
            .collect();
        Ok(cars)
    }

    async fn create(con: &mut RestSession, car: &NewCar) -> error_stack::Result<CarId, KernelError> {
        let response = con
            .request(Method::POST, "/cars")
            .json(&NewCarRecord::from(car))
            .send()
            .await
            .convert_error()?;
        let inserted = ensure_success(response)?
            .json::<InsertedRecord>()
            .await
            .convert_error()?;
        Ok(CarId::new(inserted.inserted_id))
    }

    async fn update(
        con: &mut RestSession,
        id: &CarId,
        profile: &CarProfile,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError> {
        let record = UpdateCarRecord {
            profile: ProfileRecord::from(profile),
            status: *status,
        };
        let response = con
            .request(Method::PUT, &Self::path(id))
            .json(&record)
            .send()
            .await
            .convert_error()?;
        ensure_success(response)?;
        Ok(())
    }

    async fn update_status(
        con: &mut RestSession,
        id: &CarId,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError> {
        let response = con
            .request(Method::PATCH, &Self::path(id))
            .json(&StatusRecord { status: *status })
            .send()
            .await
            .convert_error()?;
        ensure_success(response)?;
        Ok(())
    }

    async fn delete(con: &mut RestSession, id: &CarId) -> error_stack::Result<(), KernelError> {
        let response = con
            .request(Method::DELETE, &Self::path(id))
            .send()
            .await
            .convert_error()?;
        ensure_success(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::routing::{get, patch};
    use axum::{Json, Router};
    use kernel::interface::query::CarQuery;
    use kernel::interface::update::CarModifier;
    use kernel::prelude::entity::{
        Car, CarCategory, CarDescription, CarId, CarImageUrl, CarLocation, CarName, CarProfile,
        CarStatus, CreatedAt, NewCar, RentPrice, UserEmail, UserName,
    };
    use kernel::KernelError;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use time::macros::datetime;

    use super::{CarRecord, NewCarRecord, RestCarRepository};
    use crate::database::rest::stub;

    fn listing(id: &str) -> Value {
        json!({
            "_id": id,
            "carName": "Honda Civic",
            "category": "Sedan",
            "rentPrice": "5000",
            "providerEmail": "rahim@example.com",
            "dateAdded": "2025-05-01T08:30:00.000Z"
        })
    }

    #[tokio::test]
    async fn missing_car_is_none() {
        let router = Router::new()
            .route("/cars/gone", get(|| async { StatusCode::NOT_FOUND }))
            .route("/cars/null", get(|| async { Json(Value::Null) }))
            .route(
                "/cars/:id",
                get(|Path(id): Path<String>| async move { Json(listing(&id)) }),
            );
        let mut con = stub::session(router).await;

        let gone = RestCarRepository
            .find_by_id(&mut con, &CarId::new("gone"))
            .await
            .unwrap();
        assert!(gone.is_none());
        let null = RestCarRepository
            .find_by_id(&mut con, &CarId::new("null"))
            .await
            .unwrap();
        assert!(null.is_none());
        let found = RestCarRepository
            .find_by_id(&mut con, &CarId::new("car-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(*found.id(), CarId::new("car-1"));
    }

    #[tokio::test]
    async fn server_error_is_network_failure() {
        let router = Router::new().route(
            "/cars/:id",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let mut con = stub::session(router).await;
        let report = RestCarRepository
            .find_by_id(&mut con, &CarId::new("car-1"))
            .await
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::Network);
    }

    #[tokio::test]
    async fn status_patch_sends_only_status() {
        let seen = Arc::new(Mutex::new(None::<Value>));
        let router = Router::new()
            .route(
                "/cars/:id",
                patch(
                    |State(seen): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                        *seen.lock().unwrap() = Some(body);
                        Json(json!({ "modifiedCount": 1 }))
                    },
                ),
            )
            .with_state(Arc::clone(&seen));
        let mut con = stub::session(router).await;

        RestCarRepository
            .update_status(&mut con, &CarId::new("car-1"), &CarStatus::Unavailable)
            .await
            .unwrap();
        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body, json!({ "status": "Unavailable" }));
    }

    #[tokio::test]
    async fn malformed_listing_is_skipped() {
        let router = Router::new().route(
            "/cars",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                assert_eq!(query.get("email").map(String::as_str), Some("rahim@example.com"));
                Json(json!([
                    listing("car-1"),
                    { "_id": "car-2", "carName": "No price" },
                    listing("car-3"),
                ]))
            }),
        );
        let mut con = stub::session(router).await;
        let cars = RestCarRepository
            .find_by_provider(&mut con, &UserEmail::new("rahim@example.com"))
            .await
            .unwrap();
        let ids = cars.iter().map(|car| car.id().clone()).collect::<Vec<_>>();
        assert_eq!(ids, vec![CarId::new("car-1"), CarId::new("car-3")]);
    }

    #[test]
    fn decodes_string_rent_price() -> Result<(), serde_json::Error> {
        let record: CarRecord = serde_json::from_str(
            r#"{
                "_id": "665f1c2ab4d5e6f708091a2b",
                "carName": "Honda Civic",
                "description": "Reliable sedan",
                "category": "Sedan",
                "rentPrice": "5000",
                "location": "Dhaka",
                "imageURL": "https://example.com/civic.png",
                "providerName": "Rahim",
                "providerEmail": "rahim@example.com",
                "dateAdded": "2025-05-01T08:30:00.000Z"
            }"#,
        )?;
        let car = Car::from(record);
        assert_eq!(
            *car.profile().rent_price(),
            RentPrice::new(Decimal::from(5000))
        );
        // listings created before status existed count as available
        assert_eq!(*car.status(), CarStatus::Available);
        assert_eq!(*car.profile().category(), CarCategory::Sedan);
        Ok(())
    }

    #[test]
    fn decodes_numeric_rent_price_and_status() -> Result<(), serde_json::Error> {
        let record: CarRecord = serde_json::from_str(
            r#"{
                "_id": "665f1c2ab4d5e6f708091a2c",
                "carName": "Toyota RAV4",
                "category": "SUV",
                "rentPrice": 7500,
                "providerEmail": "karim@example.com",
                "status": "Unavailable",
                "dateAdded": "2025-05-02T09:00:00Z"
            }"#,
        )?;
        let car = Car::from(record);
        assert_eq!(*car.profile().rent_price().as_ref(), Decimal::from(7500));
        assert_eq!(*car.status(), CarStatus::Unavailable);
        assert_eq!(*car.provider_name(), UserName::default());
        assert_eq!(*car.profile().category(), CarCategory::Suv);
        Ok(())
    }

    #[test]
    fn encodes_listing_with_api_field_names() -> Result<(), serde_json::Error> {
        let car = NewCar::new(
            CarProfile::new(
                CarName::new("Nissan Leaf"),
                CarDescription::new("City EV"),
                CarCategory::Electric,
                RentPrice::new(Decimal::from(4200)),
                CarLocation::new("Sylhet"),
                CarImageUrl::new("https://example.com/leaf.png"),
            ),
            UserName::new("Nadia"),
            UserEmail::new("nadia@example.com"),
            CarStatus::Available,
            CreatedAt::new(datetime!(2025-05-30 10:00 UTC)),
        );
        let value = serde_json::to_value(NewCarRecord::from(&car))?;
        assert_eq!(value["carName"], "Nissan Leaf");
        assert_eq!(value["imageURL"], "https://example.com/leaf.png");
        assert_eq!(value["rentPrice"], "4200");
        assert_eq!(value["providerEmail"], "nadia@example.com");
        assert_eq!(value["status"], "Available");
        assert_eq!(value["dateAdded"], "2025-05-30T10:00:00Z");
        Ok(())
    }
}
