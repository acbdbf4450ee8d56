use crate::entity::AccessToken;
use crate::KernelError;

/// Entry point to the remote store. A session is opened per flow and carries
/// the caller's credentials; there is no commit or rollback.
#[async_trait::async_trait]
pub trait DatabaseConnection<Session>: 'static + Sync + Send {
    async fn session(
        &self,
        token: Option<&AccessToken>,
    ) -> error_stack::Result<Session, KernelError>;
}

pub trait DependOnDatabaseConnection<Session>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Session>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<Session, T> DependOnDatabaseConnection<Session> for T
where
    T: DatabaseConnection<Session>,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}
