use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use error_stack::Report;
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery};
use kernel::interface::update::{
    BookingModifier, CarModifier, DependOnBookingModifier, DependOnCarModifier,
    DependOnUserModifier, UserModifier,
};
use kernel::prelude::entity::{
    AccessToken, Booking, BookingId, Car, CarCategory, CarDescription, CarId, CarImageUrl,
    CarLocation, CarName, CarProfile, CarStatus, CreatedAt, DestructCar, NewBooking, NewCar,
    RentPrice, UserEmail, UserId, UserName, UserProfile,
};
use kernel::KernelError;
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::transfer::UserDto;

#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum Fault {
    CreateBooking,
    DeleteBooking,
    UpdateCarStatus,
    SaveUser,
    FindCar(CarId),
}

pub struct MockSession;

/// In-memory stand-in for the rental API.
pub struct MockStore {
    now: OffsetDateTime,
    cars: Mutex<HashMap<CarId, Car>>,
    bookings: Mutex<HashMap<BookingId, Booking>>,
    users: Mutex<HashMap<UserId, UserProfile>>,
    faults: Mutex<HashSet<Fault>>,
    sequence: AtomicU64,
}

impl MockStore {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now,
            cars: Mutex::new(HashMap::new()),
            bookings: Mutex::new(HashMap::new()),
            users: Mutex::new(HashMap::new()),
            faults: Mutex::new(HashSet::new()),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> String {
        format!("{:024x}", self.sequence.fetch_add(1, Ordering::SeqCst))
    }

    fn check(&self, fault: Fault) -> error_stack::Result<(), KernelError> {
        if self.faults.lock().unwrap().contains(&fault) {
            Err(Report::new(KernelError::Network))
        } else {
            Ok(())
        }
    }

    pub fn fail_on(&self, fault: Fault) {
        self.faults.lock().unwrap().insert(fault);
    }

    pub fn insert_car(&self, provider: &str, daily_rate: i64, status: CarStatus) -> CarId {
        self.insert_priced_car(provider, Decimal::from(daily_rate), status)
    }

    pub fn insert_priced_car(&self, provider: &str, daily_rate: Decimal, status: CarStatus) -> CarId {
        let car = NewCar::new(
            CarProfile::new(
                CarName::new("Toyota Corolla"),
                CarDescription::new("Compact sedan"),
                CarCategory::Sedan,
                RentPrice::new(daily_rate),
                CarLocation::new("Dhaka"),
                CarImageUrl::new("https://example.com/corolla.png"),
            ),
            UserName::new("Provider"),
            UserEmail::new(provider),
            status,
            CreatedAt::new(self.now),
        );
        let id = CarId::new(self.next_id());
        self.cars
            .lock()
            .unwrap()
            .insert(id.clone(), car.into_car(id.clone()));
        id
    }

    pub fn insert_booking(&self, booking: NewBooking) -> BookingId {
        let id = BookingId::new(self.next_id());
        self.bookings
            .lock()
            .unwrap()
            .insert(id.clone(), booking.into_booking(id.clone()));
        id
    }

    pub fn car(&self, id: &CarId) -> Option<Car> {
        self.cars.lock().unwrap().get(id).cloned()
    }

    pub fn booking(&self, id: &BookingId) -> Option<Booking> {
        self.bookings.lock().unwrap().get(id).cloned()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    pub fn user(&self, id: &UserId) -> Option<UserProfile> {
        self.users.lock().unwrap().get(id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

pub fn renter() -> UserDto {
    UserDto {
        id: "renter-uid".to_string(),
        email: "renter@example.com".to_string(),
        name: Some("Renter".to_string()),
        token: Some("token".to_string()),
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<MockSession> for MockStore {
    async fn session(
        &self,
        _token: Option<&AccessToken>,
    ) -> error_stack::Result<MockSession, KernelError> {
        Ok(MockSession)
    }
}

#[async_trait::async_trait]
impl CarQuery<MockSession> for MockStore {
    async fn find_by_id(
        &self,
        _con: &mut MockSession,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        self.check(Fault::FindCar(id.clone()))?;
        Ok(self.car(id))
    }

    async fn find_all(
        &self,
        _con: &mut MockSession,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        Ok(self.cars.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_provider(
        &self,
        _con: &mut MockSession,
        provider_email: &UserEmail,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        Ok(self
            .cars
            .lock()
            .unwrap()
            .values()
            .filter(|car| car.provider_email() == provider_email)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl CarModifier<MockSession> for MockStore {
    async fn create(
        &self,
        _con: &mut MockSession,
        car: &NewCar,
    ) -> error_stack::Result<CarId, KernelError> {
        let id = CarId::new(self.next_id());
        self.cars
            .lock()
            .unwrap()
            .insert(id.clone(), car.clone().into_car(id.clone()));
        Ok(id)
    }

    async fn update(
        &self,
        _con: &mut MockSession,
        id: &CarId,
        profile: &CarProfile,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError> {
        let mut cars = self.cars.lock().unwrap();
        let car = cars.remove(id).ok_or(KernelError::NotFound)?;
        let DestructCar {
            id,
            provider_name,
            provider_email,
            created_at,
            ..
        } = car.into_destruct();
        let updated = Car::new(
            id.clone(),
            profile.clone(),
            provider_name,
            provider_email,
            *status,
            created_at,
        );
        cars.insert(id, updated);
        Ok(())
    }

    async fn update_status(
        &self,
        _con: &mut MockSession,
        id: &CarId,
        status: &CarStatus,
    ) -> error_stack::Result<(), KernelError> {
        self.check(Fault::UpdateCarStatus)?;
        let mut cars = self.cars.lock().unwrap();
        let car = cars.remove(id).ok_or(KernelError::NotFound)?;
        let DestructCar {
            id,
            profile,
            provider_name,
            provider_email,
            created_at,
            ..
        } = car.into_destruct();
        let updated = Car::new(
            id.clone(),
            profile,
            provider_name,
            provider_email,
            *status,
            created_at,
        );
        cars.insert(id, updated);
        Ok(())
    }

    async fn delete(
        &self,
        _con: &mut MockSession,
        id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        self.cars.lock().unwrap().remove(id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl BookingQuery<MockSession> for MockStore {
    async fn find_by_renter(
        &self,
        _con: &mut MockSession,
        renter_id: &UserId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|booking| booking.renter_id() == renter_id)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl BookingModifier<MockSession> for MockStore {
    async fn create(
        &self,
        _con: &mut MockSession,
        booking: &NewBooking,
    ) -> error_stack::Result<BookingId, KernelError> {
        self.check(Fault::CreateBooking)?;
        Ok(self.insert_booking(booking.clone()))
    }

    async fn delete(
        &self,
        _con: &mut MockSession,
        id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        self.check(Fault::DeleteBooking)?;
        self.bookings.lock().unwrap().remove(id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserModifier<MockSession> for MockStore {
    async fn save(
        &self,
        _con: &mut MockSession,
        profile: &UserProfile,
    ) -> error_stack::Result<(), KernelError> {
        self.check(Fault::SaveUser)?;
        self.users
            .lock()
            .unwrap()
            .insert(profile.id().clone(), profile.clone());
        Ok(())
    }
}

impl Clock for MockStore {
    fn now(&self) -> OffsetDateTime {
        self.now
    }
}

impl DependOnClock for MockStore {
    type Clock = Self;
    fn clock(&self) -> &Self::Clock {
        self
    }
}

impl DependOnCarQuery<MockSession> for MockStore {
    type CarQuery = Self;
    fn car_query(&self) -> &Self::CarQuery {
        self
    }
}

impl DependOnCarModifier<MockSession> for MockStore {
    type CarModifier = Self;
    fn car_modifier(&self) -> &Self::CarModifier {
        self
    }
}

impl DependOnBookingQuery<MockSession> for MockStore {
    type BookingQuery = Self;
    fn booking_query(&self) -> &Self::BookingQuery {
        self
    }
}

impl DependOnBookingModifier<MockSession> for MockStore {
    type BookingModifier = Self;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        self
    }
}

impl DependOnUserModifier<MockSession> for MockStore {
    type UserModifier = Self;
    fn user_modifier(&self) -> &Self::UserModifier {
        self
    }
}
