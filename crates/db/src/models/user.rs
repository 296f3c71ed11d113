//! User model and DTOs.
//!
//! Users exist only as the foreign-key target of bookings; there is no
//! authentication or session state attached to them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seatwise_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub display_name: String,
    pub email: String,
}
