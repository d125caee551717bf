use thiserror::Error;

use crate::booking::ValidationError;

/// Failures surfaced by the booking service and repositories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("invalid booking: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
}

impl BookingError {
    pub fn booking_not_found(key: impl Into<String>) -> Self {
        BookingError::NotFound {
            entity: "booking",
            key: key.into(),
        }
    }

    pub fn guest_not_found(key: impl Into<String>) -> Self {
        BookingError::NotFound {
            entity: "guest",
            key: key.into(),
        }
    }

    pub fn accommodation_not_found(id: i64) -> Self {
        BookingError::NotFound {
            entity: "accommodation",
            key: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BookingError::NotFound { .. })
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
