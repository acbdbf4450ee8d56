use destructure::Destructure;
use vodca::References;

use crate::entity::{UserEmail, UserId, UserName, UserPhotoUrl};

static NO_NAME: &str = "No Name";

/// Public profile the rental API keeps for every signed-in user.
#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct UserProfile {
    id: UserId,
    email: UserEmail,
    display_name: UserName,
    photo_url: Option<UserPhotoUrl>,
}

impl UserProfile {
    /// Users without a display name are stored as "No Name".
    pub fn new(
        id: UserId,
        email: UserEmail,
        display_name: Option<UserName>,
        photo_url: Option<UserPhotoUrl>,
    ) -> Self {
        Self {
            id,
            email,
            display_name: display_name.unwrap_or_else(|| UserName::new(NO_NAME)),
            photo_url,
        }
    }
}
