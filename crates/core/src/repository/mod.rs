pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::BookingResult;
use crate::model::{Accommodation, Booking, Guest};

pub use memory::{InMemoryAccommodationRepository, InMemoryBookingRepository, InMemoryGuestRepository};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // Every stored booking, in insertion order
    async fn get_all(&self) -> BookingResult<Vec<Booking>>;
    async fn get_by_uuid(&self, uuid: Uuid) -> BookingResult<Booking>;
    async fn insert(&self, booking: Booking) -> BookingResult<Booking>;
    // Replaces the booking with the same uuid
    async fn update(&self, booking: Booking) -> BookingResult<Booking>;
    async fn delete(&self, uuid: Uuid) -> BookingResult<()>;
}

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn get_all(&self) -> BookingResult<Vec<Guest>>;
    async fn find_by_document(&self, document: &str) -> BookingResult<Guest>;
    // Replaces any guest with the same document
    async fn insert(&self, guest: Guest) -> BookingResult<Guest>;
}

#[async_trait]
pub trait AccommodationRepository: Send + Sync {
    async fn get_all(&self) -> BookingResult<Vec<Accommodation>>;
    async fn find_by_id(&self, id: i64) -> BookingResult<Accommodation>;
    async fn insert(&self, accommodation: Accommodation) -> BookingResult<Accommodation>;
}
