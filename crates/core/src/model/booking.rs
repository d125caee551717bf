use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Accommodation, Guest};

/// Status assigned to bookings created through the service.
pub const DEFAULT_BOOKING_STATUS: &str = "Pending";

/// A reservation linking one guest to one accommodation over a date range.
///
/// `uuid` and `created_at` are assigned once at creation and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub uuid: Uuid,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub guest: Guest,
    pub accommodation: Accommodation,
    pub status: String,
    pub created_at: NaiveDateTime,
}
