pub mod booking;
pub mod error;
pub mod events;
pub mod model;
pub mod repository;
pub mod seed;
pub mod service;
