use crate::entity::{BookingId, NewBooking};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier<Session>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Session,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError>;

    async fn delete(
        &self,
        con: &mut Session,
        id: &BookingId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookingModifier<Session>: 'static + Sync + Send {
    type BookingModifier: BookingModifier<Session>;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
