use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{Accommodation, Guest};

/// Minimal creation payload. Every field is optional at the wire level so
/// that missing fields surface as validation errors rather than decode
/// failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBooking {
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
    pub guest_document: Option<String>,
    pub accommodation_id: Option<i64>,
}

/// Full-record replacement of an existing booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBooking {
    pub uuid: String,
    pub status: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub guest: Guest,
    pub accommodation: Accommodation,
}

/// A creation payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCreateBooking {
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub guest_document: String,
    pub accommodation_id: i64,
}
