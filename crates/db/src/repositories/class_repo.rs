//! Repository for the `classes` table.

use sqlx::{PgConnection, PgPool};

use seatwise_core::item::{class_is_open, ItemType};
use seatwise_core::types::DbId;

use crate::models::class::{Class, ClassWithAvailability, CreateClass, UpdateClass};

use super::availability::ItemSnapshot;
use super::{BookingRepo, SeatLockRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, instructor_name, location, \
                       max_students, is_active, starts_on, ends_on, \
                       deleted_at, created_at, updated_at";

/// Column list for availability queries (no `deleted_at`; gated rows are
/// filtered out entirely).
const AVAILABILITY_COLUMNS: &str = "id, title, description, instructor_name, location, \
                                    max_students, is_active, starts_on, ends_on, \
                                    created_at, updated_at";

/// SQL form of the class activation gate.
///
/// Mirrors [`seatwise_core::item::class_is_open`], which the acquisition
/// path evaluates in Rust on a row locked `FOR UPDATE`.
const BOOKABLE_PREDICATE: &str = "deleted_at IS NULL AND is_active = TRUE \
    AND (starts_on IS NULL OR starts_on <= CURRENT_DATE) \
    AND (ends_on IS NULL OR ends_on >= CURRENT_DATE)";

/// Default page size for class listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for class listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD and availability operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    ///
    /// New classes default to active unless the input says otherwise.
    pub async fn create(pool: &PgPool, input: &CreateClass) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes \
                 (title, description, instructor_name, location, max_students, \
                  is_active, starts_on, ends_on) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.instructor_name)
            .bind(&input.location)
            .bind(input.max_students)
            .bind(input.is_active)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .fetch_one(pool)
            .await
    }

    /// Find a class by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookable classes with their live availability figures.
    ///
    /// Only classes passing the activation gate appear; each row carries
    /// `reserved` (counted bookings + held seats) and the clamped
    /// `spots_left`.
    pub async fn list_bookable(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ClassWithAvailability>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = offset.unwrap_or(0);

        let reserved = Self::reserved_sql("classes.id");
        let query = format!(
            "SELECT {AVAILABILITY_COLUMNS}, \
                    {reserved} AS reserved, \
                    GREATEST(max_students - {reserved}, 0) AS spots_left \
             FROM classes \
             WHERE {BOOKABLE_PREDICATE} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ClassWithAvailability>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fetch one bookable class with its availability figures.
    ///
    /// Returns `None` for missing, soft-deleted, or gated-out classes:
    /// an item failing its activation gate simply is not offered.
    pub async fn find_bookable_with_availability(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClassWithAvailability>, sqlx::Error> {
        let reserved = Self::reserved_sql("classes.id");
        let query = format!(
            "SELECT {AVAILABILITY_COLUMNS}, \
                    {reserved} AS reserved, \
                    GREATEST(max_students - {reserved}, 0) AS spots_left \
             FROM classes \
             WHERE id = $1 AND {BOOKABLE_PREDICATE}"
        );
        sqlx::query_as::<_, ClassWithAvailability>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Lock a class row for the duration of an acquisition transaction.
    ///
    /// `FOR UPDATE` serializes concurrent acquisitions against the same
    /// class; the returned snapshot carries the capacity and gate verdict
    /// the admission check runs on.
    pub async fn lock_for_booking(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<ItemSnapshot>, sqlx::Error> {
        #[derive(sqlx::FromRow)]
        struct GateRow {
            max_students: i32,
            is_active: bool,
            starts_on: Option<chrono::NaiveDate>,
            ends_on: Option<chrono::NaiveDate>,
        }

        let row: Option<GateRow> = sqlx::query_as(
            "SELECT max_students, is_active, starts_on, ends_on \
             FROM classes WHERE id = $1 AND deleted_at IS NULL \
             FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let today = chrono::Utc::now().date_naive();
        Ok(row.map(|r| ItemSnapshot {
            capacity: r.max_students,
            bookable: class_is_open(r.is_active, r.starts_on, r.ends_on, today),
        }))
    }

    /// Update a class. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                instructor_name = COALESCE($4, instructor_name), \
                location = COALESCE($5, location), \
                max_students = COALESCE($6, max_students), \
                is_active = COALESCE($7, is_active), \
                starts_on = COALESCE($8, starts_on), \
                ends_on = COALESCE($9, ends_on) \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.instructor_name)
            .bind(&input.location)
            .bind(input.max_students)
            .bind(input.is_active)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a class by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE classes SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The combined reservation tally expression for a class row.
    fn reserved_sql(class_id_expr: &str) -> String {
        format!(
            "({} + {})",
            BookingRepo::counted_bookings_sql("class_id", class_id_expr),
            SeatLockRepo::held_seats_sql(&ItemType::Class.id().to_string(), class_id_expr),
        )
    }
}
