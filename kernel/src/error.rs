use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Rejected(BookingRejection),
    NotFound,
    Network,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Rejected(rejection) => Display::fmt(rejection, f),
            KernelError::NotFound => write!(f, "Requested resource was not found"),
            KernelError::Network => write!(f, "Request to the rental API failed"),
            KernelError::Timeout => write!(f, "Request to the rental API timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

impl From<BookingRejection> for KernelError {
    fn from(rejection: BookingRejection) -> Self {
        KernelError::Rejected(rejection)
    }
}

/// Why a booking or listing request was refused before anything was written.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BookingRejection {
    SelfBookingNotAllowed,
    MissingDates,
    StartDateInPast,
    InvalidDateRange,
    CarUnavailable,
    InvalidRentPrice,
    PriceOutOfRange,
}

impl Display for BookingRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingRejection::SelfBookingNotAllowed => write!(f, "You cannot book your own car"),
            BookingRejection::MissingDates => {
                write!(f, "Please select both start and end dates")
            }
            BookingRejection::StartDateInPast => write!(f, "Start date cannot be in the past"),
            BookingRejection::InvalidDateRange => write!(f, "End date must be after start date"),
            BookingRejection::CarUnavailable => write!(f, "This car is currently unavailable"),
            BookingRejection::InvalidRentPrice => write!(f, "Daily rent price must be positive"),
            BookingRejection::PriceOutOfRange => {
                write!(f, "Total price is too large for this booking")
            }
        }
    }
}
