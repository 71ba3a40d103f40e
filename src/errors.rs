use std::io;

use thiserror::Error;
use validator::ValidationErrors;

/// Coarse class of a rejected store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Precondition,
}

#[derive(Debug, Error, PartialEq)]
pub enum HotelError {
    #[error("This hotel already exists.")]
    Duplicate { name: String, location: String },
}

impl HotelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HotelError::Duplicate { .. } => ErrorKind::Conflict,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("No hotels available to book.")]
    NoHotelsAvailable,
    #[error("Hotel not found.")]
    HotelNotFound,
    #[error("Invalid room number.")]
    InvalidRoomNumber,
    #[error("Room is already occupied.")]
    RoomOccupied,
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::HotelNotFound => ErrorKind::NotFound,
            BookingError::RoomOccupied => ErrorKind::Conflict,
            BookingError::NoHotelsAvailable | BookingError::InvalidRoomNumber => {
                ErrorKind::Precondition
            }
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BillingError {
    #[error("No bookings done.")]
    NoBookingsExist,
    #[error("Hotel not found.")]
    HotelNotFound,
    #[error("Booking not found.")]
    BookingNotFound,
}

impl BillingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::NoBookingsExist => ErrorKind::Precondition,
            BillingError::HotelNotFound | BillingError::BookingNotFound => ErrorKind::NotFound,
        }
    }
}

/// Failures of the text front end, as opposed to rejected store operations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input closed")]
    Eof,
    #[error("console i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("'{value}' is not a valid {field}.")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl ConsoleError {
    /// Recoverable errors are reported and the menu is shown again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConsoleError::InvalidNumber { .. } | ConsoleError::Invalid(_)
        )
    }
}
