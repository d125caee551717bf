pub mod id;
pub mod request;
pub mod validate;

pub use request::{CreateBooking, UpdateBooking};
pub use validate::ValidationError;
