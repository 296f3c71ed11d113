//! Handlers for the `/locks` resource — the seat-lock boundary.
//!
//! Acquisition is the admission-control entry point: it either commits a
//! time-boxed hold against the item's capacity or reports exactly why it
//! could not. Release frees a hold early and is idempotent.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use seatwise_core::error::CoreError;
use seatwise_core::lock::{clamp_ttl_minutes, validate_quantity};
use seatwise_core::types::DbId;
use seatwise_db::models::seat_lock::{AcquireLockRequest, AcquireSeatLock};
use seatwise_db::repositories::seat_lock_repo::{AcquireOutcome, ReleaseOutcome};
use seatwise_db::repositories::SeatLockRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Acquire
// ---------------------------------------------------------------------------

/// POST /api/v1/locks
///
/// Attempt to hold seats on a class or event while checkout is in flight.
/// Returns 201 with the created lock on success; the lock id is the
/// client's reservation handle. Fails 400 with `ITEM_UNAVAILABLE` or
/// `CAPACITY_EXCEEDED` — both terminal for this attempt, not transient.
pub async fn acquire_lock(
    State(state): State<AppState>,
    Json(body): Json<AcquireLockRequest>,
) -> AppResult<impl IntoResponse> {
    let quantity = body.quantity.unwrap_or(1);
    validate_quantity(quantity)?;
    let ttl_minutes = clamp_ttl_minutes(body.ttl_minutes);

    let input = AcquireSeatLock {
        item_type: body.item_type,
        item_id: body.item_id,
        user_id: body.user_id,
        quantity,
        ttl_minutes,
    };

    match SeatLockRepo::acquire(&state.pool, &input).await? {
        AcquireOutcome::Acquired(lock) => {
            tracing::info!(
                lock_id = lock.id,
                item_type = %body.item_type,
                item_id = body.item_id,
                quantity,
                ttl_minutes,
                "Seat lock acquired",
            );
            Ok((StatusCode::CREATED, Json(DataResponse { data: lock })))
        }
        AcquireOutcome::ItemUnavailable => Err(AppError::Core(CoreError::ItemUnavailable {
            item_type: body.item_type,
            item_id: body.item_id,
        })),
        AcquireOutcome::CapacityExceeded { spots_left } => {
            tracing::debug!(
                item_type = %body.item_type,
                item_id = body.item_id,
                quantity,
                spots_left,
                "Seat lock refused: capacity exceeded",
            );
            Err(AppError::Core(CoreError::CapacityExceeded {
                requested: quantity,
                spots_left,
            }))
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/v1/locks/{id}
///
/// Fetch a lock by its id so a client can inspect its reservation handle
/// (status, expiry) mid-checkout.
pub async fn get_lock(
    State(state): State<AppState>,
    Path(lock_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lock = SeatLockRepo::find_by_id(&state.pool, lock_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Seat lock",
            id: lock_id,
        }))?;

    Ok(Json(DataResponse { data: lock }))
}

// ---------------------------------------------------------------------------
// Release
// ---------------------------------------------------------------------------

/// DELETE /api/v1/locks/{id}
///
/// Voluntarily release a hold (e.g. the user abandoned checkout). 204 on
/// success, including when the lock already lapsed — releasing twice is a
/// no-op, not an error. 404 only for an id that never existed.
pub async fn release_lock(
    State(state): State<AppState>,
    Path(lock_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match SeatLockRepo::release(&state.pool, lock_id).await? {
        ReleaseOutcome::Released => {
            tracing::info!(lock_id, "Seat lock released");
            Ok(StatusCode::NO_CONTENT)
        }
        ReleaseOutcome::AlreadyInactive => Ok(StatusCode::NO_CONTENT),
        ReleaseOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Seat lock",
            id: lock_id,
        })),
    }
}
