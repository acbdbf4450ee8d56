use kernel::interface::update::UserModifier;
use kernel::prelude::entity::UserProfile;
use kernel::KernelError;
use reqwest::Method;
use serde::Serialize;

use crate::database::rest::{ensure_success, RestSession};
use crate::error::ConvertError;

pub struct RestUserRepository;

#[async_trait::async_trait]
impl UserModifier<RestSession> for RestUserRepository {
    async fn save(
        &self,
        con: &mut RestSession,
        profile: &UserProfile,
    ) -> error_stack::Result<(), KernelError> {
        let response = con
            .request(Method::POST, "/users")
            .json(&UserRecord::from(profile))
            .send()
            .await
            .convert_error()?;
        ensure_success(response)?;
        Ok(())
    }
}

/// `photoURL` is sent as an explicit null when the user has none.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord<'a> {
    uid: &'a String,
    email: &'a String,
    display_name: &'a String,
    #[serde(rename = "photoURL")]
    photo_url: Option<&'a String>,
}

impl<'a> From<&'a UserProfile> for UserRecord<'a> {
    fn from(value: &'a UserProfile) -> Self {
        Self {
            uid: value.id().as_ref(),
            email: value.email().as_ref(),
            display_name: value.display_name().as_ref(),
            photo_url: value.photo_url().as_ref().map(AsRef::<String>::as_ref),
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::routing::post;
    use axum::{Json, Router};
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{UserEmail, UserId, UserName, UserPhotoUrl, UserProfile};
    use serde_json::{json, Value};

    use super::{RestUserRepository, UserRecord};
    use crate::database::rest::stub;

    #[test]
    fn encodes_missing_photo_as_null() -> Result<(), serde_json::Error> {
        let profile = UserProfile::new(
            UserId::new("firebase-uid-1"),
            UserEmail::new("renter@example.com"),
            None,
            None,
        );
        let value = serde_json::to_value(UserRecord::from(&profile))?;
        assert_eq!(
            value,
            json!({
                "uid": "firebase-uid-1",
                "email": "renter@example.com",
                "displayName": "No Name",
                "photoURL": null
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn save_posts_profile() {
        let seen = Arc::new(Mutex::new(None::<Value>));
        let router = Router::new()
            .route(
                "/users",
                post(
                    |State(seen): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                        *seen.lock().unwrap() = Some(body);
                        Json(json!({ "acknowledged": true }))
                    },
                ),
            )
            .with_state(Arc::clone(&seen));
        let mut con = stub::session(router).await;

        let profile = UserProfile::new(
            UserId::new("firebase-uid-1"),
            UserEmail::new("renter@example.com"),
            Some(UserName::new("Rahim")),
            Some(UserPhotoUrl::new("https://example.com/rahim.png")),
        );
        RestUserRepository.save(&mut con, &profile).await.unwrap();

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["displayName"], "Rahim");
        assert_eq!(body["photoURL"], "https://example.com/rahim.png");
    }
}
