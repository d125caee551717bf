use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Whether an accommodation can currently be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccommodationStatus {
    #[serde(rename = "Disponível", alias = "Available")]
    Available,
    #[serde(rename = "Indisponível", alias = "Unavailable")]
    Unavailable,
}

/// A bookable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: i64,
    pub name: String,
    pub status: AccommodationStatus,
    pub total_guests: u32,
    pub single_beds: u32,
    pub double_beds: u32,
    pub min_nights: u32,
    /// Kept as submitted so integer prices stay integers on the wire.
    pub price: Number,
    pub created_at: NaiveDateTime,
    /// Serialized as a sorted array.
    #[serde(default)]
    pub amenities: BTreeSet<String>,
}
