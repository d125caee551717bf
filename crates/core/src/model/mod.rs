pub mod accommodation;
pub mod booking;
pub mod guest;

pub use accommodation::{Accommodation, AccommodationStatus};
pub use booking::{Booking, DEFAULT_BOOKING_STATUS};
pub use guest::Guest;
