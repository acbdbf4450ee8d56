use crate::entity::{Booking, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery<Session>: Sync + Send + 'static {
    async fn find_by_renter(
        &self,
        con: &mut Session,
        renter_id: &UserId,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
}

pub trait DependOnBookingQuery<Session>: Sync + Send + 'static {
    type BookingQuery: BookingQuery<Session>;
    fn booking_query(&self) -> &Self::BookingQuery;
}
