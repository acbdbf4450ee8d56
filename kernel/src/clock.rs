use time::{Date, OffsetDateTime, UtcOffset};

pub trait Clock: 'static + Sync + Send {
    fn now(&self) -> OffsetDateTime;

    /// Calendar day in UTC. Used when the caller did not say where it is.
    fn today(&self) -> Date {
        self.now().date()
    }

    /// Calendar day as seen by a caller at `offset` from UTC.
    fn today_at(&self, offset: UtcOffset) -> Date {
        self.now().to_offset(offset).date()
    }
}

pub trait DependOnClock: 'static + Sync + Send {
    type Clock: Clock;
    fn clock(&self) -> &Self::Clock;
}
