use crate::error::DriverError;

pub mod clock;
pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> Result<String, DriverError> {
    dotenvy::var(key).map_err(DriverError::from)
}

pub(crate) fn env_or(key: &str, default: &str) -> Result<String, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default.to_string()),
        Err(error) => Err(DriverError::from(error)),
    }
}
