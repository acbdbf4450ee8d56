use kernel::prelude::entity::{
    Car, CarCategory, CarDescription, CarImageUrl, CarLocation, CarName, CarProfile, CarStatus,
    DestructCar, DestructCarProfile, RentPrice,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::transfer::UserDto;

#[derive(Debug, Clone)]
pub struct CarDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: CarCategory,
    pub rent_price: Decimal,
    pub location: String,
    pub image_url: String,
    pub provider_name: String,
    pub provider_email: String,
    pub status: CarStatus,
    pub created_at: OffsetDateTime,
}

impl From<Car> for CarDto {
    fn from(value: Car) -> Self {
        let DestructCar {
            id,
            profile,
            provider_name,
            provider_email,
            status,
            created_at,
        } = value.into_destruct();
        let DestructCarProfile {
            name,
            description,
            category,
            rent_price,
            location,
            image_url,
        } = profile.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            rent_price: rent_price.into(),
            location: location.into(),
            image_url: image_url.into(),
            provider_name: provider_name.into(),
            provider_email: provider_email.into(),
            status,
            created_at: created_at.time(),
        }
    }
}

/// Fields a provider fills in when listing or editing a car.
#[derive(Debug, Clone)]
pub struct CarProfileDto {
    pub name: String,
    pub description: String,
    pub category: CarCategory,
    pub rent_price: Decimal,
    pub location: String,
    pub image_url: String,
}

impl From<CarProfileDto> for CarProfile {
    fn from(value: CarProfileDto) -> Self {
        CarProfile::new(
            CarName::new(value.name),
            CarDescription::new(value.description),
            value.category,
            RentPrice::new(value.rent_price),
            CarLocation::new(value.location),
            CarImageUrl::new(value.image_url),
        )
    }
}

pub struct GetCarDto {
    pub id: String,
}

pub struct GetProviderCarDto {
    pub user: UserDto,
}

pub struct AddCarDto {
    pub user: UserDto,
    pub profile: CarProfileDto,
}

pub struct UpdateCarDto {
    pub user: UserDto,
    pub id: String,
    pub profile: CarProfileDto,
    pub status: CarStatus,
}

pub struct DeleteCarDto {
    pub user: UserDto,
    pub id: String,
}
