use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewRsvp, Rsvp};

#[cfg(test)]
pub mod memory;
pub mod mysql;

/// Storage interface for RSVP records, one implementation per backend.
#[async_trait]
pub trait RsvpStore: Send + Sync {
    /// Returns every stored RSVP, ordered by id.
    async fn list_rsvps(&self) -> Result<Vec<Rsvp>>;

    /// Inserts one RSVP and returns the row as stored.
    async fn insert_rsvp(&self, new_rsvp: &NewRsvp) -> Result<Rsvp>;
}
