use std::time::Duration;

use error_stack::Report;
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnBookingQuery, DependOnCarQuery};
use kernel::interface::update::{
    DependOnBookingModifier, DependOnCarModifier, DependOnUserModifier,
};
use kernel::prelude::entity::AccessToken;
use kernel::KernelError;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::clock::SystemClock;
use crate::error::{ConvertError, DriverError};
use crate::{env, env_or};

pub use self::{booking::*, car::*, user::*};

mod booking;
mod car;
mod user;

static RENTAL_API_URL: &str = "RENTAL_API_URL";
static RENTAL_API_TIMEOUT_SECS: &str = "RENTAL_API_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct RestConfig {
    base_url: String,
    timeout: Duration,
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }

    pub fn from_env() -> Result<Self, DriverError> {
        let base_url = env(RENTAL_API_URL)?;
        let timeout = env_or(RENTAL_API_TIMEOUT_SECS, "30")?;
        let timeout = timeout.parse::<u64>().map_err(|_| {
            DriverError::Config(format!("{RENTAL_API_TIMEOUT_SECS} must be whole seconds"))
        })?;
        Ok(Self::new(base_url, Duration::from_secs(timeout)))
    }
}

/// Client for the car rental REST API.
pub struct RestApi {
    config: RestConfig,
    client: Client,
}

impl RestApi {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let config = RestConfig::from_env().convert_error()?;
        Self::with_config(config)
    }

    pub fn with_config(config: RestConfig) -> error_stack::Result<Self, KernelError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .convert_error()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<RestSession> for RestApi {
    async fn session(
        &self,
        token: Option<&AccessToken>,
    ) -> error_stack::Result<RestSession, KernelError> {
        Ok(RestSession {
            client: self.client.clone(),
            base_url: self.config.base_url.clone(),
            token: token.cloned(),
        })
    }
}

/// Per-flow handle on the API carrying the caller's bearer token.
pub struct RestSession {
    client: Client,
    base_url: String,
    token: Option<AccessToken>,
}

impl RestSession {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "rental api request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(AsRef::<String>::as_ref(token)),
            None => builder,
        }
    }
}

/// Fails with the matching kernel error unless the response is a success.
pub(in crate::database) fn ensure_success(
    response: Response,
) -> error_stack::Result<Response, KernelError> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(Report::new(KernelError::NotFound).attach_printable(response.url().to_string()));
    }
    response.error_for_status().convert_error()
}

/// Body MongoDB-style APIs answer inserts with.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::database) struct InsertedRecord {
    pub inserted_id: String,
}

impl DependOnCarQuery<RestSession> for RestApi {
    type CarQuery = RestCarRepository;
    fn car_query(&self) -> &Self::CarQuery {
        &RestCarRepository
    }
}

impl DependOnCarModifier<RestSession> for RestApi {
    type CarModifier = RestCarRepository;
    fn car_modifier(&self) -> &Self::CarModifier {
        &RestCarRepository
    }
}

impl DependOnBookingQuery<RestSession> for RestApi {
    type BookingQuery = RestBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &RestBookingRepository
    }
}

impl DependOnBookingModifier<RestSession> for RestApi {
    type BookingModifier = RestBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &RestBookingRepository
    }
}

impl DependOnUserModifier<RestSession> for RestApi {
    type UserModifier = RestUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &RestUserRepository
    }
}

impl DependOnClock for RestApi {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &SystemClock
    }
}

/// Loopback stand-in for the rental API.
#[cfg(test)]
pub(in crate::database) mod stub {
    use std::time::Duration;

    use kernel::interface::database::DatabaseConnection;

    use super::{RestApi, RestConfig, RestSession};

    pub async fn session(router: axum::Router) -> RestSession {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        let config = RestConfig::new(format!("http://{addr}"), Duration::from_secs(5));
        RestApi::with_config(config)
            .unwrap()
            .session(None)
            .await
            .unwrap()
    }
}
