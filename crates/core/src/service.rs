use std::sync::Arc;

use chrono::{NaiveDateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::booking::id::parse_booking_id;
use crate::booking::validate::{validate_create, validate_update};
use crate::booking::{CreateBooking, UpdateBooking};
use crate::error::{BookingError, BookingResult};
use crate::events::{BookingChange, BookingEvent, EventBus};
use crate::model::{Accommodation, Booking, Guest, DEFAULT_BOOKING_STATUS};
use crate::repository::{
    AccommodationRepository, BookingRepository, GuestRepository, InMemoryAccommodationRepository,
    InMemoryBookingRepository, InMemoryGuestRepository,
};

/// Booking lifecycle rules on top of the repositories.
///
/// Cloning is cheap; all clones share the same repositories and event bus.
#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    guests: Arc<dyn GuestRepository>,
    accommodations: Arc<dyn AccommodationRepository>,
    events: EventBus,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        guests: Arc<dyn GuestRepository>,
        accommodations: Arc<dyn AccommodationRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            bookings,
            guests,
            accommodations,
            events,
        }
    }

    /// Service over empty in-memory repositories.
    pub fn in_memory(events: EventBus) -> Self {
        Self::new(
            Arc::new(InMemoryBookingRepository::new()),
            Arc::new(InMemoryGuestRepository::new()),
            Arc::new(InMemoryAccommodationRepository::new()),
            events,
        )
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.bookings.clone()
    }

    pub fn guest_repository(&self) -> Arc<dyn GuestRepository> {
        self.guests.clone()
    }

    pub fn accommodation_repository(&self) -> Arc<dyn AccommodationRepository> {
        self.accommodations.clone()
    }

    pub async fn list(&self) -> BookingResult<Vec<Booking>> {
        self.bookings.get_all().await
    }

    pub async fn get(&self, uuid: &str) -> BookingResult<Booking> {
        let id = parse_id(uuid)?;
        tracing::debug!(%id, "fetching booking");
        self.bookings.get_by_uuid(id).await
    }

    /// Validate a creation payload, resolve its guest and accommodation, and
    /// persist a new booking with a fresh uuid and creation timestamp.
    pub async fn create(&self, payload: CreateBooking) -> BookingResult<Booking> {
        let valid = validate_create(payload)?;

        let guest = self.guests.find_by_document(&valid.guest_document).await?;
        let accommodation = self
            .accommodations
            .find_by_id(valid.accommodation_id)
            .await?;

        let booking = Booking {
            uuid: Uuid::new_v4(),
            check_in: valid.check_in,
            check_out: valid.check_out,
            guest,
            accommodation,
            status: DEFAULT_BOOKING_STATUS.to_string(),
            created_at: now(),
        };

        let booking = self.bookings.insert(booking).await?;
        tracing::info!(
            uuid = %booking.uuid,
            guest = %booking.guest.document,
            accommodation = booking.accommodation.id,
            "booking created"
        );
        self.events
            .publish(BookingEvent::Created(BookingChange::now(booking.uuid)));
        Ok(booking)
    }

    /// Replace the mutable fields of an existing booking. `uuid` and
    /// `created_at` are kept from the stored record.
    pub async fn update(&self, payload: UpdateBooking) -> BookingResult<()> {
        let id = parse_id(&payload.uuid)?;
        let existing = self.bookings.get_by_uuid(id).await?;
        validate_update(&payload)?;

        let booking = Booking {
            uuid: existing.uuid,
            check_in: payload.check_in,
            check_out: payload.check_out,
            guest: payload.guest,
            accommodation: payload.accommodation,
            status: payload.status.trim().to_string(),
            created_at: existing.created_at,
        };

        self.bookings.update(booking).await?;
        tracing::info!(uuid = %id, "booking updated");
        self.events
            .publish(BookingEvent::Updated(BookingChange::now(id)));
        Ok(())
    }

    pub async fn delete(&self, uuid: &str) -> BookingResult<()> {
        let id = parse_id(uuid)?;
        self.bookings.delete(id).await?;
        tracing::info!(uuid = %id, "booking deleted");
        self.events
            .publish(BookingEvent::Deleted(BookingChange::now(id)));
        Ok(())
    }

    pub async fn list_guests(&self) -> BookingResult<Vec<Guest>> {
        self.guests.get_all().await
    }

    pub async fn get_guest(&self, document: &str) -> BookingResult<Guest> {
        self.guests.find_by_document(document).await
    }

    pub async fn list_accommodations(&self) -> BookingResult<Vec<Accommodation>> {
        self.accommodations.get_all().await
    }

    pub async fn get_accommodation(&self, id: i64) -> BookingResult<Accommodation> {
        self.accommodations.find_by_id(id).await
    }
}

// Malformed identifiers cannot name a stored booking
fn parse_id(raw: &str) -> BookingResult<Uuid> {
    parse_booking_id(raw).ok_or_else(|| BookingError::booking_not_found(raw))
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}
