//! Handlers for the `/bookings` resource — the booking workflow's surface.
//!
//! Bookings are created Pending and flipped through their lifecycle by
//! the payment flow (or an admin override). Capacity is NOT checked here:
//! a well-behaved purchase goes through lock acquisition first, and the
//! confirmed booking then takes over the seats its lock was holding.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use seatwise_core::error::CoreError;
use seatwise_core::types::DbId;
use seatwise_db::models::booking::{Booking, ConfirmBooking, CreateBooking};
use seatwise_db::repositories::{BookingRepo, SeatLockRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a booking by ID or 404.
async fn find_booking(pool: &sqlx::PgPool, booking_id: DbId) -> AppResult<Booking> {
    BookingRepo::find_by_id(pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/bookings
///
/// Create a new pending booking for exactly one class or event. Returns
/// 201 with the created row.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    if input.class_id.is_some() == input.event_id.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "exactly one of class_id or event_id must be set".into(),
        )));
    }

    let booking = BookingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        booking_id = booking.id,
        user_id = booking.user_id,
        "Booking created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/v1/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = find_booking(&state.pool, booking_id).await?;
    Ok(Json(DataResponse { data: booking }))
}

// ---------------------------------------------------------------------------
// Confirm
// ---------------------------------------------------------------------------

/// POST /api/v1/bookings/{id}/confirm
///
/// Confirm a pending booking after payment capture (or admin override).
/// If the body names the seat lock the purchase was holding, that lock is
/// marked consumed; otherwise it is left to lapse on its own, which is
/// equally correct — the confirmed booking now occupies the seats.
/// 409 if the booking is not pending, or if the user already holds a
/// counted booking for this item.
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
    body: Option<Json<ConfirmBooking>>,
) -> AppResult<impl IntoResponse> {
    find_booking(&state.pool, booking_id).await?;

    let confirmed = BookingRepo::confirm(&state.pool, booking_id).await?;
    if !confirmed {
        return Err(AppError::Core(CoreError::Conflict(
            "Booking is not pending and cannot be confirmed".into(),
        )));
    }

    let input = body.map(|Json(b)| b).unwrap_or_default();
    if let Some(lock_id) = input.lock_id {
        let consumed = SeatLockRepo::consume(&state.pool, lock_id).await?;
        if !consumed {
            // The lock already lapsed; harmless, the booking holds the seats.
            tracing::debug!(booking_id, lock_id, "Lock was not active at confirmation");
        }
    }

    tracing::info!(booking_id, "Booking confirmed");

    let booking = find_booking(&state.pool, booking_id).await?;
    Ok(Json(DataResponse { data: booking }))
}

// ---------------------------------------------------------------------------
// Cancel
// ---------------------------------------------------------------------------

/// POST /api/v1/bookings/{id}/cancel
///
/// Cancel a pending or confirmed booking, freeing its seats. 409 if the
/// booking is already cancelled or completed.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_booking(&state.pool, booking_id).await?;

    let cancelled = BookingRepo::cancel(&state.pool, booking_id).await?;
    if !cancelled {
        return Err(AppError::Core(CoreError::Conflict(
            "Booking is already in a terminal state and cannot be cancelled".into(),
        )));
    }

    tracing::info!(booking_id, "Booking cancelled");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Complete
// ---------------------------------------------------------------------------

/// POST /api/v1/bookings/{id}/complete
///
/// Mark a confirmed booking completed once the class or event has taken
/// place. Driven by an external scheduler, not by this service. 409 if
/// the booking is not confirmed.
pub async fn complete_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_booking(&state.pool, booking_id).await?;

    let completed = BookingRepo::complete(&state.pool, booking_id).await?;
    if !completed {
        return Err(AppError::Core(CoreError::Conflict(
            "Only confirmed bookings can be completed".into(),
        )));
    }

    tracing::info!(booking_id, "Booking completed");

    let booking = find_booking(&state.pool, booking_id).await?;
    Ok(Json(DataResponse { data: booking }))
}
