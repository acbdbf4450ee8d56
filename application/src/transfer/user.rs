use kernel::prelude::entity::{AccessToken, User, UserEmail, UserId, UserName};

/// Identity of the caller as established by the identity provider.
#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub token: Option<String>,
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        User::new(
            UserId::new(value.id),
            UserEmail::new(value.email),
            value.name.map(UserName::new),
            value.token.map(AccessToken::new),
        )
    }
}

/// Profile refresh sent after every sign-in or profile edit.
#[derive(Debug, Clone)]
pub struct SaveUserDto {
    pub user: UserDto,
    pub photo_url: Option<String>,
}
