use application::transfer::SaveUserDto;
use serde::Deserialize;

use crate::controller::Intake;
use crate::extract::CurrentUser;

/// Identity comes from the headers; only the avatar travels in the body.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(rename = "photoURL", default)]
    photo_url: Option<String>,
}

pub struct Transformer;

impl Intake<(CurrentUser, SaveRequest)> for Transformer {
    type To = SaveUserDto;
    fn emit(&self, input: (CurrentUser, SaveRequest)) -> Self::To {
        let (CurrentUser(user), request) = input;
        SaveUserDto {
            user,
            photo_url: request.photo_url,
        }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::UserDto;

    use super::{SaveRequest, Transformer};
    use crate::controller::Intake;
    use crate::extract::CurrentUser;

    #[test]
    fn photo_url_is_optional() {
        let user = CurrentUser(UserDto {
            id: "uid-1".to_string(),
            email: "renter@example.com".to_string(),
            name: Some("Rahim".to_string()),
            token: None,
        });
        let request: SaveRequest =
            serde_json::from_str(r#"{"photoURL": "https://example.com/rahim.png"}"#).unwrap();
        let dto = Transformer.emit((user.clone(), request));
        assert_eq!(dto.photo_url.as_deref(), Some("https://example.com/rahim.png"));
        assert_eq!(dto.user.name.as_deref(), Some("Rahim"));

        let request: SaveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(Transformer.emit((user, request)).photo_url, None);
    }
}
