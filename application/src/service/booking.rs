use error_stack::{Report, ResultExt};
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery};
use kernel::interface::update::{
    BookingModifier, CarModifier, DependOnBookingModifier, DependOnCarModifier,
};
use kernel::prelude::calculator::{preview_booking, validate_booking};
use kernel::prelude::entity::{
    AccessToken, BookingId, BookingStatus, Car, CarId, CarStatus, CreatedOn, NewBooking,
    User,
};
use kernel::{BookingRejection, KernelError};

use crate::transfer::{
    BookingDetailDto, BookingDto, CancelBookingDto, CarDto, ConfirmBookingDto,
    GetRenterBookingsDto, QuoteBookingDto, QuoteDto,
};

async fn require_car<Session, T>(
    service: &T,
    con: &mut Session,
    car_id: &CarId,
) -> error_stack::Result<Car, KernelError>
where
    T: DependOnCarQuery<Session> + ?Sized,
{
    service
        .car_query()
        .find_by_id(con, car_id)
        .await?
        .ok_or_else(|| Report::new(KernelError::NotFound))
        .attach_printable_lazy(|| format!("car {car_id:?} does not exist"))
}

#[async_trait::async_trait]
pub trait QuoteBookingService<Session: Send + 'static>:
    'static + Sync + Send + DependOnDatabaseConnection<Session> + DependOnCarQuery<Session>
{
    /// Price preview for a car over the chosen dates; incomplete or inverted dates quote zero.
    async fn quote_booking(&self, dto: QuoteBookingDto) -> error_stack::Result<QuoteDto, KernelError> {
        let mut con = self.database_connection().session(None).await?;
        let car_id = CarId::new(dto.car_id);
        let car = require_car(self, &mut con, &car_id).await?;
        let quote = preview_booking(dto.start_date, dto.end_date, car.profile().rent_price())
            .map_err(|rejection| Report::new(KernelError::from(rejection)))?;
        Ok(QuoteDto::from(quote))
    }
}

impl<Session: Send + 'static, T> QuoteBookingService<Session> for T where
    T: DependOnDatabaseConnection<Session> + DependOnCarQuery<Session>
{
}

#[async_trait::async_trait]
pub trait BookingService<Session: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Session>
    + DependOnCarQuery<Session>
    + DependOnCarModifier<Session>
    + DependOnBookingModifier<Session>
    + DependOnClock
{
    /// Validates and prices the request, stores the booking, then marks the car unavailable.
    ///
    /// The two writes are not atomic. When the status update fails the booking
    /// stays stored and the returned report says so.
    async fn confirm_booking(
        &self,
        dto: ConfirmBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let user = User::from(dto.user);
        let car_id = CarId::new(dto.car_id);
        let mut con = self
            .database_connection()
            .session(user.token().as_ref())
            .await?;

        let car = require_car(self, &mut con, &car_id).await?;
        let today = match dto.utc_offset {
            Some(offset) => self.clock().today_at(offset),
            None => self.clock().today(),
        };
        let validated = validate_booking(
            user.email(),
            car.provider_email(),
            dto.start_date,
            dto.end_date,
            car.profile().rent_price(),
            today,
        )
        .map_err(|rejection| Report::new(KernelError::from(rejection)))?;

        if !car.is_available() {
            return Err(Report::new(KernelError::from(
                BookingRejection::CarUnavailable,
            )));
        }

        let quote = validated.quote();
        let booking = NewBooking::new(
            car_id.clone(),
            user.id().clone(),
            user.email().clone(),
            *validated.period(),
            *quote.days(),
            *quote.total_price(),
            BookingStatus::Confirmed,
            CreatedOn::new(today),
        );
        let id = self
            .booking_modifier()
            .create(&mut con, &booking)
            .await
            .attach_printable("booking failed")?;

        if let Err(report) = self
            .car_modifier()
            .update_status(&mut con, &car_id, &CarStatus::Unavailable)
            .await
        {
            tracing::warn!(
                booking_id = ?id,
                car_id = ?car_id,
                "booking stored but car status update failed"
            );
            return Err(report.attach_printable(format!(
                "booking {id:?} was stored but car {car_id:?} is still marked available"
            )));
        }

        tracing::info!(booking_id = ?id, car_id = ?car_id, renter = ?user.id(), "booking confirmed");
        Ok(BookingDto::from(booking.into_booking(id)))
    }
}

impl<Session: Send + 'static, T> BookingService<Session> for T where
    T: DependOnDatabaseConnection<Session>
        + DependOnCarQuery<Session>
        + DependOnCarModifier<Session>
        + DependOnBookingModifier<Session>
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait CancelBookingService<Session: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Session>
    + DependOnCarModifier<Session>
    + DependOnBookingModifier<Session>
{
    /// Deletes the booking, then marks the car available again. Not atomic either.
    async fn cancel_booking(&self, dto: CancelBookingDto) -> error_stack::Result<(), KernelError> {
        let user = User::from(dto.user);
        let booking_id = BookingId::new(dto.booking_id);
        let car_id = CarId::new(dto.car_id);
        let mut con = self
            .database_connection()
            .session(user.token().as_ref())
            .await?;

        self.booking_modifier()
            .delete(&mut con, &booking_id)
            .await
            .attach_printable("failed to cancel booking")?;

        if let Err(report) = self
            .car_modifier()
            .update_status(&mut con, &car_id, &CarStatus::Available)
            .await
        {
            tracing::warn!(
                booking_id = ?booking_id,
                car_id = ?car_id,
                "booking deleted but car status update failed"
            );
            return Err(report.attach_printable(format!(
                "booking {booking_id:?} was deleted but car {car_id:?} is still marked unavailable"
            )));
        }

        tracing::info!(booking_id = ?booking_id, car_id = ?car_id, "booking cancelled");
        Ok(())
    }
}

impl<Session: Send + 'static, T> CancelBookingService<Session> for T where
    T: DependOnDatabaseConnection<Session>
        + DependOnCarModifier<Session>
        + DependOnBookingModifier<Session>
{
}

#[async_trait::async_trait]
pub trait GetBookingService<Session: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Session>
    + DependOnBookingQuery<Session>
    + DependOnCarQuery<Session>
    + DependOnClock
{
    /// The renter's bookings, newest first, each with its car fetched independently.
    async fn get_renter_bookings(
        &self,
        dto: GetRenterBookingsDto,
    ) -> error_stack::Result<Vec<BookingDetailDto>, KernelError> {
        let user = User::from(dto.user);
        let token = user.token().as_ref();
        let mut con = self.database_connection().session(token).await?;
        let bookings = self
            .booking_query()
            .find_by_renter(&mut con, user.id())
            .await?;

        let today = self.clock().today();
        let lookups = bookings.into_iter().map(move |booking| async move {
            let car = self.lookup_car(token, booking.car_id()).await;
            BookingDetailDto {
                phase: booking.phase(today),
                car: car.map(CarDto::from),
                booking: BookingDto::from(booking),
            }
        });
        let mut details = futures::future::join_all(lookups).await;
        details.sort_by(|a, b| b.booking.booking_date.cmp(&a.booking.booking_date));
        Ok(details)
    }

    /// A failed lookup only costs the booking its car details.
    async fn lookup_car(&self, token: Option<&AccessToken>, car_id: &CarId) -> Option<Car> {
        let found = match self.database_connection().session(token).await {
            Ok(mut con) => self.car_query().find_by_id(&mut con, car_id).await,
            Err(report) => Err(report),
        };
        match found {
            Ok(car) => car,
            Err(report) => {
                tracing::warn!(car_id = ?car_id, "failed to fetch car details: {report:?}");
                None
            }
        }
    }
}

impl<Session: Send + 'static, T> GetBookingService<Session> for T where
    T: DependOnDatabaseConnection<Session>
        + DependOnBookingQuery<Session>
        + DependOnCarQuery<Session>
        + DependOnClock
{
}
