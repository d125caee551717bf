/// Booking payload validation.
use chrono::NaiveDateTime;
use thiserror::Error;

use super::request::{CreateBooking, UpdateBooking, ValidCreateBooking};
use crate::model::Booking;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("check_in is required")]
    MissingCheckIn,
    #[error("check_out is required")]
    MissingCheckOut,
    #[error("guest_document is required")]
    MissingGuestDocument,
    #[error("accommodation_id is required")]
    MissingAccommodationId,
    #[error("guest_document cannot be empty")]
    EmptyGuestDocument,
    #[error("status cannot be empty")]
    EmptyStatus,
    #[error("check_out ({check_out}) must be after check_in ({check_in})")]
    InvalidStayRange {
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    },
}

/// Check that a creation payload carries every required field.
pub fn validate_create(payload: CreateBooking) -> Result<ValidCreateBooking, ValidationError> {
    let check_in = payload.check_in.ok_or(ValidationError::MissingCheckIn)?;
    let check_out = payload.check_out.ok_or(ValidationError::MissingCheckOut)?;
    let guest_document = payload
        .guest_document
        .ok_or(ValidationError::MissingGuestDocument)?;
    let accommodation_id = payload
        .accommodation_id
        .ok_or(ValidationError::MissingAccommodationId)?;

    let guest_document = guest_document.trim().to_string();
    if guest_document.is_empty() {
        return Err(ValidationError::EmptyGuestDocument);
    }
    validate_stay(check_in, check_out)?;

    Ok(ValidCreateBooking {
        check_in,
        check_out,
        guest_document,
        accommodation_id,
    })
}

/// Check the mutable fields of a replacement payload.
pub fn validate_update(payload: &UpdateBooking) -> Result<(), ValidationError> {
    validate_status(&payload.status)?;
    validate_stay(payload.check_in, payload.check_out)
}

/// Check a complete booking record, such as one loaded from fixtures.
pub fn validate_booking(booking: &Booking) -> Result<(), ValidationError> {
    validate_status(&booking.status)?;
    validate_stay(booking.check_in, booking.check_out)
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.trim().is_empty() {
        return Err(ValidationError::EmptyStatus);
    }
    Ok(())
}

fn validate_stay(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Result<(), ValidationError> {
    if check_out <= check_in {
        return Err(ValidationError::InvalidStayRange {
            check_in,
            check_out,
        });
    }
    Ok(())
}
