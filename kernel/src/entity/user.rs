mod email;
mod id;
mod name;
mod photo;
mod profile;
mod token;

pub use self::{email::*, id::*, name::*, photo::*, profile::*, token::*};
use destructure::Destructure;
use vodca::References;

/// The signed-in user a request acts on behalf of.
///
/// Identity is established by the external identity provider; this value is
/// only ever handed in by the caller and passed down explicitly.
#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct User {
    id: UserId,
    email: UserEmail,
    name: Option<UserName>,
    token: Option<AccessToken>,
}

impl User {
    pub fn new(
        id: UserId,
        email: UserEmail,
        name: Option<UserName>,
        token: Option<AccessToken>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            token,
        }
    }
}
