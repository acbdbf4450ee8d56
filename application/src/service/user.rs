use error_stack::ResultExt;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserPhotoUrl, UserProfile};
use kernel::KernelError;

use crate::transfer::SaveUserDto;

#[async_trait::async_trait]
pub trait SaveUserService<Session: Send + 'static>:
    'static + Sync + Send + DependOnDatabaseConnection<Session> + DependOnUserModifier<Session>
{
    async fn save_user(&self, dto: SaveUserDto) -> error_stack::Result<(), KernelError> {
        let user = User::from(dto.user);
        let photo_url = dto
            .photo_url
            .filter(|url| !url.trim().is_empty())
            .map(UserPhotoUrl::new);
        let profile = UserProfile::new(
            user.id().clone(),
            user.email().clone(),
            user.name().clone(),
            photo_url,
        );
        let mut con = self
            .database_connection()
            .session(user.token().as_ref())
            .await?;
        self.user_modifier()
            .save(&mut con, &profile)
            .await
            .attach_printable("failed to save user")?;
        tracing::info!(user_id = ?user.id(), "user profile saved");
        Ok(())
    }
}

impl<Session: Send + 'static, T> SaveUserService<Session> for T where
    T: DependOnDatabaseConnection<Session> + DependOnUserModifier<Session>
{
}
