use error_stack::{Report, ResultExt};
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{CarQuery, DependOnCarQuery};
use kernel::interface::update::{CarModifier, DependOnCarModifier};
use kernel::prelude::entity::{CarId, CarProfile, CarStatus, CreatedAt, NewCar, User};
use kernel::{BookingRejection, KernelError};

use crate::transfer::{AddCarDto, CarDto, DeleteCarDto, GetCarDto, GetProviderCarDto, UpdateCarDto};

fn checked_profile(profile: CarProfile) -> error_stack::Result<CarProfile, KernelError> {
    if profile.rent_price().is_positive() {
        Ok(profile)
    } else {
        Err(Report::new(KernelError::from(BookingRejection::InvalidRentPrice)))
    }
}

#[async_trait::async_trait]
pub trait GetCarService<Session: Send + 'static>:
    'static + Sync + Send + DependOnDatabaseConnection<Session> + DependOnCarQuery<Session>
{
    async fn get_car(&self, dto: &GetCarDto) -> error_stack::Result<Option<CarDto>, KernelError> {
        let mut con = self.database_connection().session(None).await?;
        let id = CarId::new(dto.id.clone());
        let car = self.car_query().find_by_id(&mut con, &id).await?;
        Ok(car.map(CarDto::from))
    }

    async fn get_all_cars(&self) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let mut con = self.database_connection().session(None).await?;
        let cars = self.car_query().find_all(&mut con).await?;
        Ok(cars.into_iter().map(CarDto::from).collect())
    }

    async fn get_provider_cars(
        &self,
        dto: GetProviderCarDto,
    ) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let user = User::from(dto.user);
        let mut con = self
            .database_connection()
            .session(user.token().as_ref())
            .await?;
        let cars = self
            .car_query()
            .find_by_provider(&mut con, user.email())
            .await?;
        Ok(cars.into_iter().map(CarDto::from).collect())
    }
}

impl<Session: Send + 'static, T> GetCarService<Session> for T where
    T: DependOnDatabaseConnection<Session> + DependOnCarQuery<Session>
{
}

#[async_trait::async_trait]
pub trait HandleCarService<Session: Send + 'static>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Session>
    + DependOnCarModifier<Session>
    + DependOnClock
{
    /// Lists a new car under the caller's name; it starts out available.
    async fn add_car(&self, dto: AddCarDto) -> error_stack::Result<CarDto, KernelError> {
        let user = User::from(dto.user);
        let profile = checked_profile(CarProfile::from(dto.profile))?;
        let mut con = self
            .database_connection()
            .session(user.token().as_ref())
            .await?;

        let car = NewCar::new(
            profile,
            user.name().clone().unwrap_or_default(),
            user.email().clone(),
            CarStatus::Available,
            CreatedAt::new(self.clock().now()),
        );
        let id = self
            .car_modifier()
            .create(&mut con, &car)
            .await
            .attach_printable("failed to add car")?;
        tracing::info!(car_id = ?id, provider = ?user.email(), "car listed");
        Ok(CarDto::from(car.into_car(id)))
    }

    async fn update_car(&self, dto: UpdateCarDto) -> error_stack::Result<(), KernelError> {
        let user = User::from(dto.user);
        let id = CarId::new(dto.id);
        let profile = checked_profile(CarProfile::from(dto.profile))?;
        let mut con = self
            .database_connection()
            .session(user.token().as_ref())
            .await?;
        self.car_modifier()
            .update(&mut con, &id, &profile, &dto.status)
            .await
            .attach_printable("failed to update car")?;
        tracing::info!(car_id = ?id, status = %dto.status, "car updated");
        Ok(())
    }

    async fn delete_car(&self, dto: DeleteCarDto) -> error_stack::Result<(), KernelError> {
        let user = User::from(dto.user);
        let id = CarId::new(dto.id);
        let mut con = self
            .database_connection()
            .session(user.token().as_ref())
            .await?;
        self.car_modifier()
            .delete(&mut con, &id)
            .await
            .attach_printable("failed to delete car")?;
        tracing::info!(car_id = ?id, "car deleted");
        Ok(())
    }
}

impl<Session: Send + 'static, T> HandleCarService<Session> for T where
    T: DependOnDatabaseConnection<Session> + DependOnCarModifier<Session> + DependOnClock
{
}
