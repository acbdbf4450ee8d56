use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

use time::{Date, OffsetDateTime};

time::serde::format_description!(pub calendar_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatedAt<T>(OffsetDateTime, PhantomData<T>);

impl<T> CreatedAt<T> {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into(), PhantomData)
    }

    pub fn time(&self) -> OffsetDateTime {
        self.0
    }
}

impl<T> Serialize for CreatedAt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(&self.0, serializer)
    }
}

impl<'de, T> Deserialize<'de> for CreatedAt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        time::serde::rfc3339::deserialize(deserializer).map(|time| Self(time, PhantomData))
    }
}

/// Date-only creation stamp, written as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatedOn<T>(Date, PhantomData<T>);

impl<T> CreatedOn<T> {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into(), PhantomData)
    }

    pub fn date(&self) -> Date {
        self.0
    }
}

impl<T> Serialize for CreatedOn<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        calendar_date::serialize(&self.0, serializer)
    }
}

impl<'de, T> Deserialize<'de> for CreatedOn<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        calendar_date::deserialize(deserializer).map(|date| Self(date, PhantomData))
    }
}
