use kernel::interface::clock::Clock;
use time::OffsetDateTime;

/// Wall clock in UTC.
///
/// The host's local offset is never consulted: it says nothing about where the
/// renter is. Callers that know the renter's offset pass it to `today_at`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
