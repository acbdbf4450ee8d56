use destructure::Destructure;
use vodca::{AsRefln, Fromln, References};

use crate::entity::{CarCategory, RentPrice};

/// The part of a listing its provider may edit.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CarProfile {
    name: CarName,
    description: CarDescription,
    category: CarCategory,
    rent_price: RentPrice,
    location: CarLocation,
    image_url: CarImageUrl,
}

impl CarProfile {
    pub fn new(
        name: CarName,
        description: CarDescription,
        category: CarCategory,
        rent_price: RentPrice,
        location: CarLocation,
        image_url: CarImageUrl,
    ) -> Self {
        Self {
            name,
            description,
            category,
            rent_price,
            location,
            image_url,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct CarName(String);

impl CarName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct CarDescription(String);

impl CarDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct CarLocation(String);

impl CarLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct CarImageUrl(String);

impl CarImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}
