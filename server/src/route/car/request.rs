use application::transfer::{
    AddCarDto, CarProfileDto, DeleteCarDto, GetCarDto, GetProviderCarDto, UpdateCarDto,
};
use kernel::prelude::entity::{CarCategory, CarStatus};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::controller::Intake;
use crate::extract::CurrentUser;

/// Listing fields as the front end posts them. `rentPrice` may be a string or a number.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    car_name: String,
    #[serde(default)]
    description: String,
    category: CarCategory,
    rent_price: Decimal,
    #[serde(default)]
    location: String,
    #[serde(rename = "imageURL", default)]
    image_url: String,
}

impl From<CreateRequest> for CarProfileDto {
    fn from(value: CreateRequest) -> Self {
        CarProfileDto {
            name: value.car_name,
            description: value.description,
            category: value.category,
            rent_price: value.rent_price,
            location: value.location,
            image_url: value.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(flatten)]
    profile: CreateRequest,
    #[serde(default)]
    status: CarStatus,
}

#[derive(Debug)]
pub struct GetRequest {
    id: String,
}

impl GetRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteRequest {
    user: CurrentUser,
    id: String,
}

impl DeleteRequest {
    pub fn new(user: CurrentUser, id: String) -> Self {
        Self { user, id }
    }
}

pub struct Transformer;

impl Intake<GetRequest> for Transformer {
    type To = GetCarDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetCarDto { id: input.id }
    }
}

impl Intake<CurrentUser> for Transformer {
    type To = GetProviderCarDto;
    fn emit(&self, input: CurrentUser) -> Self::To {
        GetProviderCarDto { user: input.0 }
    }
}

impl Intake<(CurrentUser, CreateRequest)> for Transformer {
    type To = AddCarDto;
    fn emit(&self, input: (CurrentUser, CreateRequest)) -> Self::To {
        let (CurrentUser(user), request) = input;
        AddCarDto {
            user,
            profile: request.into(),
        }
    }
}

impl Intake<(CurrentUser, String, UpdateRequest)> for Transformer {
    type To = UpdateCarDto;
    fn emit(&self, input: (CurrentUser, String, UpdateRequest)) -> Self::To {
        let (CurrentUser(user), id, request) = input;
        UpdateCarDto {
            user,
            id,
            profile: request.profile.into(),
            status: request.status,
        }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteCarDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteCarDto {
            user: input.user.0,
            id: input.id,
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{CarCategory, CarStatus};
    use rust_decimal::Decimal;

    use super::{CreateRequest, Transformer, UpdateRequest};
    use crate::controller::Intake;
    use crate::extract::CurrentUser;
    use application::transfer::UserDto;

    fn user() -> CurrentUser {
        CurrentUser(UserDto {
            id: "uid-7".to_string(),
            email: "provider@example.com".to_string(),
            name: Some("Provider".to_string()),
            token: None,
        })
    }

    #[test]
    fn listing_form_becomes_add_dto() {
        let request: CreateRequest = serde_json::from_str(
            r#"{
                "carName": "Mazda 3",
                "category": "Hatchback",
                "rentPrice": "3500",
                "location": "Khulna",
                "imageURL": "https://example.com/mazda.png"
            }"#,
        )
        .unwrap();
        let dto = Transformer.emit((user(), request));
        assert_eq!(dto.user.email, "provider@example.com");
        assert_eq!(dto.profile.name, "Mazda 3");
        assert_eq!(dto.profile.category, CarCategory::Hatchback);
        assert_eq!(dto.profile.rent_price, Decimal::from(3500));
        assert_eq!(dto.profile.description, "");
    }

    #[test]
    fn update_keeps_status_from_body() {
        let request: UpdateRequest = serde_json::from_str(
            r#"{
                "carName": "Mazda 3",
                "category": "Hatchback",
                "rentPrice": 3600,
                "status": "Unavailable"
            }"#,
        )
        .unwrap();
        let dto = Transformer.emit((user(), "car-1".to_string(), request));
        assert_eq!(dto.id, "car-1");
        assert_eq!(dto.status, CarStatus::Unavailable);
        assert_eq!(dto.profile.rent_price, Decimal::from(3600));
    }
}
