use crate::entity::{Car, CarId, UserEmail};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarQuery<Session>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Session,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError>;

    async fn find_all(&self, con: &mut Session) -> error_stack::Result<Vec<Car>, KernelError>;

    async fn find_by_provider(
        &self,
        con: &mut Session,
        provider_email: &UserEmail,
    ) -> error_stack::Result<Vec<Car>, KernelError>;
}

pub trait DependOnCarQuery<Session>: Sync + Send + 'static {
    type CarQuery: CarQuery<Session>;
    fn car_query(&self) -> &Self::CarQuery;
}
