use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use log::info;

use crate::error::Result;
use crate::extract::JsonOrForm;
use crate::models::{CreateRsvpRequest, NewRsvp, Rsvp};
use crate::store::RsvpStore;

/// `createdBy` recorded on every insert; the API has no authenticated users.
const SYSTEM_USER_ID: i32 = 1;

// GET /api/rsvps
pub async fn get_rsvps<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Rsvp>>>
where
    S: RsvpStore,
{
    let rsvps = store.list_rsvps().await?;
    Ok(Json(rsvps))
}

// POST /api/rsvp
pub async fn create_rsvp<S>(
    State(store): State<Arc<S>>,
    JsonOrForm(payload): JsonOrForm<CreateRsvpRequest>,
) -> Result<Json<Rsvp>>
where
    S: RsvpStore,
{
    let new_rsvp = NewRsvp {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        status: payload.status,
        created_by: SYSTEM_USER_ID,
    };

    let rsvp = store.insert_rsvp(&new_rsvp).await?;

    info!("Recorded rsvp id={} for {}", rsvp.id, rsvp.name);

    Ok(Json(rsvp))
}
