/// Startup fixtures: guests, accommodations and bookings loaded from JSON.
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::booking::validate::validate_booking;
use crate::error::BookingError;
use crate::model::{Accommodation, Booking, Guest};
use crate::service::BookingService;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to store seed data: {0}")]
    Store(#[from] BookingError),
    #[error("invalid seeded booking {uuid}: {source}")]
    InvalidBooking { uuid: Uuid, source: BookingError },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// How many records of each kind were loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub guests: usize,
    pub accommodations: usize,
    pub bookings: usize,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Store every record through the service's repositories.
    ///
    /// Bookings must satisfy the same rules as created ones: a valid stay, a
    /// non-blank status, and a guest and accommodation present in the seed or
    /// already stored. No booking is stored unless all of them pass.
    pub async fn apply(self, service: &BookingService) -> Result<SeedSummary, SeedError> {
        let summary = SeedSummary {
            guests: self.guests.len(),
            accommodations: self.accommodations.len(),
            bookings: self.bookings.len(),
        };

        let guests = service.guest_repository();
        for guest in self.guests {
            guests.insert(guest).await?;
        }
        let accommodations = service.accommodation_repository();
        for accommodation in self.accommodations {
            accommodations.insert(accommodation).await?;
        }
        for booking in &self.bookings {
            check_booking(service, booking)
                .await
                .map_err(|source| SeedError::InvalidBooking {
                    uuid: booking.uuid,
                    source,
                })?;
        }
        let bookings = service.booking_repository();
        for booking in self.bookings {
            bookings.insert(booking).await?;
        }

        tracing::info!(
            guests = summary.guests,
            accommodations = summary.accommodations,
            bookings = summary.bookings,
            "seed data loaded"
        );
        Ok(summary)
    }
}

async fn check_booking(service: &BookingService, booking: &Booking) -> Result<(), BookingError> {
    validate_booking(booking)?;
    service.get_guest(&booking.guest.document).await?;
    service.get_accommodation(booking.accommodation.id).await?;
    Ok(())
}
