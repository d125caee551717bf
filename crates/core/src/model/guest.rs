use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Person a booking is made for, keyed by their identity document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub document: String,
    pub name: String,
    pub surname: String,
    pub country: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
}
