use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events emitted after successful booking mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BookingEvent {
    Created(BookingChange),
    Updated(BookingChange),
    Deleted(BookingChange),
}

impl BookingEvent {
    pub fn change(&self) -> &BookingChange {
        match self {
            BookingEvent::Created(change)
            | BookingEvent::Updated(change)
            | BookingEvent::Deleted(change) => change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingChange {
    pub booking_uuid: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl BookingChange {
    pub fn now(booking_uuid: Uuid) -> Self {
        Self {
            booking_uuid,
            timestamp: Utc::now(),
        }
    }
}
