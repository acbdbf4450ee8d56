use crate::entity::UserProfile;
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier<Session>: 'static + Sync + Send {
    /// Creates the profile or refreshes the stored one for the same user.
    async fn save(
        &self,
        con: &mut Session,
        profile: &UserProfile,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier<Session>: 'static + Sync + Send {
    type UserModifier: UserModifier<Session>;
    fn user_modifier(&self) -> &Self::UserModifier;
}
