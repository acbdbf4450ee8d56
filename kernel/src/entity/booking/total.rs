use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::RentPrice;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TotalDays(i64);

impl TotalDays {
    pub fn new(days: impl Into<i64>) -> Self {
        Self(days.into())
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TotalPrice(Decimal);

impl TotalPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// `days * daily_rate`, or `None` when the product does not fit a `Decimal`.
    pub fn of(days: &TotalDays, daily_rate: &RentPrice) -> Option<Self> {
        let rate: &Decimal = daily_rate.as_ref();
        Decimal::from(days.0).checked_mul(*rate).map(Self)
    }
}
