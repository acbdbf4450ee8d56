mod category;
mod id;
mod profile;
mod rent_price;
mod status;

pub use self::{category::*, id::*, profile::*, rent_price::*, status::*};
use crate::entity::common::CreatedAt;
use crate::entity::{UserEmail, UserName};
use destructure::Destructure;
use vodca::References;

/// A vehicle listed by a provider, as held by the rental API.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Car {
    id: CarId,
    profile: CarProfile,
    provider_name: UserName,
    provider_email: UserEmail,
    status: CarStatus,
    created_at: CreatedAt<Car>,
}

impl Car {
    pub fn new(
        id: CarId,
        profile: CarProfile,
        provider_name: UserName,
        provider_email: UserEmail,
        status: CarStatus,
        created_at: CreatedAt<Car>,
    ) -> Self {
        Self {
            id,
            profile,
            provider_name,
            provider_email,
            status,
            created_at,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == CarStatus::Available
    }
}

/// A listing that has not been stored yet; the rental API assigns its id.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct NewCar {
    profile: CarProfile,
    provider_name: UserName,
    provider_email: UserEmail,
    status: CarStatus,
    created_at: CreatedAt<Car>,
}

impl NewCar {
    pub fn new(
        profile: CarProfile,
        provider_name: UserName,
        provider_email: UserEmail,
        status: CarStatus,
        created_at: CreatedAt<Car>,
    ) -> Self {
        Self {
            profile,
            provider_name,
            provider_email,
            status,
            created_at,
        }
    }

    pub fn into_car(self, id: CarId) -> Car {
        Car::new(
            id,
            self.profile,
            self.provider_name,
            self.provider_email,
            self.status,
            self.created_at,
        )
    }
}
