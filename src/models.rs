use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored RSVP row, as read from the `rsvp` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_by: i32,
    pub created_date: NaiveDate,
}

// Request DTOs

/// POST /api/rsvp body, accepted as JSON or a URL-encoded form.
#[derive(Debug, Deserialize)]
pub struct CreateRsvpRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}

/// Store-level insert arguments. `created_date` is assigned by the storage
/// backend, not the caller.
#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_by: i32,
}
