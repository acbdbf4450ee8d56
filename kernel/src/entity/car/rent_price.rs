use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Daily rate of a car.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentPrice(Decimal);

impl RentPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}
