//! Class model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seatwise_core::types::{Day, DbId, Timestamp};

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub instructor_name: Option<String>,
    pub location: Option<String>,
    /// Fixed seat capacity; changes only through an explicit update.
    pub max_students: i32,
    pub is_active: bool,
    pub starts_on: Option<Day>,
    pub ends_on: Option<Day>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A class row joined with its live reservation tally.
///
/// `reserved` and `spots_left` are computed in SQL from counted bookings
/// and active seat locks; see `ClassRepo::list_bookable`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassWithAvailability {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub instructor_name: Option<String>,
    pub location: Option<String>,
    pub max_students: i32,
    pub is_active: bool,
    pub starts_on: Option<Day>,
    pub ends_on: Option<Day>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub reserved: i64,
    pub spots_left: i64,
}

/// DTO for creating a new class.
#[derive(Debug, Deserialize)]
pub struct CreateClass {
    pub title: String,
    pub description: Option<String>,
    pub instructor_name: Option<String>,
    pub location: Option<String>,
    pub max_students: i32,
    pub is_active: Option<bool>,
    pub starts_on: Option<Day>,
    pub ends_on: Option<Day>,
}

/// DTO for patching a class. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateClass {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor_name: Option<String>,
    pub location: Option<String>,
    pub max_students: Option<i32>,
    pub is_active: Option<bool>,
    pub starts_on: Option<Day>,
    pub ends_on: Option<Day>,
}
