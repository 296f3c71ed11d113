//! Event model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seatwise_core::types::{DbId, Timestamp};

use super::status::StatusId;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    /// Fixed seat capacity; changes only through an explicit update.
    pub max_attendees: i32,
    pub status_id: StatusId,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event row joined with its live reservation tally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventWithAvailability {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub max_attendees: i32,
    pub status_id: StatusId,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub reserved: i64,
    pub spots_left: i64,
}

/// DTO for creating a new event. Starts in `Draft` unless a status is given.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub max_attendees: i32,
    pub status_id: Option<StatusId>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// DTO for patching an event. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub max_attendees: Option<i32>,
    pub status_id: Option<StatusId>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}
