use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AccommodationRepository, BookingRepository, GuestRepository};
use crate::error::{BookingError, BookingResult};
use crate::model::{Accommodation, Booking, Guest};

/// Bookings held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn get_all(&self) -> BookingResult<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn get_by_uuid(&self, uuid: Uuid) -> BookingResult<Booking> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.uuid == uuid)
            .cloned()
            .ok_or_else(|| BookingError::booking_not_found(uuid.to_string()))
    }

    async fn insert(&self, booking: Booking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write().await;
        // uuids are unique: a re-inserted uuid replaces the stored record
        match bookings.iter_mut().find(|b| b.uuid == booking.uuid) {
            Some(existing) => *existing = booking.clone(),
            None => bookings.push(booking.clone()),
        }
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write().await;
        let existing = bookings
            .iter_mut()
            .find(|b| b.uuid == booking.uuid)
            .ok_or_else(|| BookingError::booking_not_found(booking.uuid.to_string()))?;
        *existing = booking.clone();
        Ok(booking)
    }

    async fn delete(&self, uuid: Uuid) -> BookingResult<()> {
        let mut bookings = self.bookings.write().await;
        let index = bookings
            .iter()
            .position(|b| b.uuid == uuid)
            .ok_or_else(|| BookingError::booking_not_found(uuid.to_string()))?;
        bookings.remove(index);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGuestRepository {
    guests: RwLock<BTreeMap<String, Guest>>,
}

impl InMemoryGuestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn get_all(&self) -> BookingResult<Vec<Guest>> {
        Ok(self.guests.read().await.values().cloned().collect())
    }

    async fn find_by_document(&self, document: &str) -> BookingResult<Guest> {
        self.guests
            .read()
            .await
            .get(document)
            .cloned()
            .ok_or_else(|| BookingError::guest_not_found(document))
    }

    async fn insert(&self, guest: Guest) -> BookingResult<Guest> {
        self.guests
            .write()
            .await
            .insert(guest.document.clone(), guest.clone());
        Ok(guest)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAccommodationRepository {
    accommodations: RwLock<BTreeMap<i64, Accommodation>>,
}

impl InMemoryAccommodationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccommodationRepository for InMemoryAccommodationRepository {
    async fn get_all(&self) -> BookingResult<Vec<Accommodation>> {
        Ok(self.accommodations.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> BookingResult<Accommodation> {
        self.accommodations
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| BookingError::accommodation_not_found(id))
    }

    async fn insert(&self, accommodation: Accommodation) -> BookingResult<Accommodation> {
        self.accommodations
            .write()
            .await
            .insert(accommodation.id, accommodation.clone());
        Ok(accommodation)
    }
}
