use application::transfer::UserDto;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use crate::error::ErrorMessage;

static USER_ID: &str = "x-user-id";
static USER_EMAIL: &str = "x-user-email";
static USER_NAME: &str = "x-user-name";

/// Caller identity forwarded by the front end after it signed the user in.
///
/// Tokens are passed through to the rental API untouched and never verified here.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserDto);

#[derive(Debug)]
pub struct Unauthenticated;

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorMessage::new("Please log in to continue")),
        )
            .into_response()
    }
}

fn header(headers: &HeaderMap, key: &str) -> Option<String> {
    headers
        .get(key)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

impl CurrentUser {
    fn from_headers(headers: &HeaderMap) -> Result<Self, Unauthenticated> {
        let id = header(headers, USER_ID).ok_or(Unauthenticated)?;
        let email = header(headers, USER_EMAIL).ok_or(Unauthenticated)?;
        let token = headers
            .typed_get::<Authorization<Bearer>>()
            .map(|auth| auth.token().to_string());
        Ok(Self(UserDto {
            id,
            email,
            name: header(headers, USER_NAME),
            token,
        }))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Unauthenticated;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}

#[cfg(test)]
mod test {
    use axum::http::{HeaderMap, HeaderValue};

    use super::CurrentUser;

    #[test]
    fn reads_identity_and_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-id", HeaderValue::from_static("uid-1"));
        headers.insert("x-user-email", HeaderValue::from_static("renter@example.com"));
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        let CurrentUser(user) = CurrentUser::from_headers(&headers).unwrap();
        assert_eq!(user.id, "uid-1");
        assert_eq!(user.email, "renter@example.com");
        assert_eq!(user.name, None);
        assert_eq!(user.token.as_deref(), Some("abc.def"));
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-id", HeaderValue::from_static("uid-1"));
        headers.insert("x-user-email", HeaderValue::from_static("renter@example.com"));
        headers.insert("x-user-name", HeaderValue::from_static("  "));
        let CurrentUser(user) = CurrentUser::from_headers(&headers).unwrap();
        assert_eq!(user.name, None);
        assert_eq!(user.token, None);
    }

    #[test]
    fn missing_email_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("x-user-id", HeaderValue::from_static("uid-1"));
        assert!(CurrentUser::from_headers(&headers).is_err());
    }
}
