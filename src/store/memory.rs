use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::RsvpStore;
use crate::error::Result;
use crate::models::{NewRsvp, Rsvp};

/// In-memory store used by the handler tests.
pub struct MemoryRsvpStore {
    rows: RwLock<Vec<Rsvp>>,
    next_id: AtomicI64,
}

impl MemoryRsvpStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl RsvpStore for MemoryRsvpStore {
    async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
        // Rows are appended in id order, so insertion order matches the
        // MySQL store's `order by id`.
        Ok(self.rows.read().await.clone())
    }

    async fn insert_rsvp(&self, new_rsvp: &NewRsvp) -> Result<Rsvp> {
        // Allocate the id while holding the write lock so concurrent inserts
        // cannot land in the Vec out of id order.
        let mut rows = self.rows.write().await;

        let rsvp = Rsvp {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_rsvp.name.clone(),
            email: new_rsvp.email.clone(),
            phone: new_rsvp.phone.clone(),
            status: new_rsvp.status.clone(),
            created_by: new_rsvp.created_by,
            created_date: Utc::now().date_naive(),
        };

        rows.push(rsvp.clone());
        Ok(rsvp)
    }
}
