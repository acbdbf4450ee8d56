use time::Date;

/// Start and end dates of a rental. Both are calendar dates without a time of day.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct RentalPeriod {
    start: Date,
    end: Date,
}

impl RentalPeriod {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Whole days between start and end, or zero when the range is empty or inverted.
    pub fn days(&self) -> i64 {
        (self.end - self.start).whole_days().max(0)
    }
}
