use crate::entity::{CarId, CarProfile, CarStatus, NewCar};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarModifier<Session>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Session,
        car: &NewCar,
    ) -> error_stack::Result<CarId, KernelError>;

    /// Replaces the editable fields and the status of a listing.
    async fn update(
        &self,
        con: &mut Session,
        id: &CarId,
        profile: &CarProfile,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError>;

    /// Partial update touching only `status`.
    async fn update_status(
        &self,
        con: &mut Session,
        id: &CarId,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(&self, con: &mut Session, id: &CarId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCarModifier<Session>: 'static + Sync + Send {
    type CarModifier: CarModifier<Session>;
    fn car_modifier(&self) -> &Self::CarModifier;
}
