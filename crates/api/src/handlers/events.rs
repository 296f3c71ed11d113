//! Handlers for the `/events` resource.
//!
//! Public reads return only published events, each carrying computed
//! `reserved` and `spots_left` figures alongside `max_attendees`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use seatwise_core::error::CoreError;
use seatwise_core::types::DbId;
use seatwise_db::models::event::{CreateEvent, UpdateEvent};
use seatwise_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /api/v1/events
///
/// List published events with live availability. Supports optional
/// `limit` and `offset` query parameters.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list_bookable(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/v1/events/{id}
///
/// Get a single published event with live availability. A missing or
/// unpublished event is simply not offered: 404.
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_bookable_with_availability(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    Ok(Json(DataResponse { data: event }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/events
///
/// Create a new event. Returns 201 with the created row; events start in
/// `draft` unless a status is supplied.
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    if input.max_attendees < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "max_attendees must not be negative".into(),
        )));
    }

    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(
        event_id = event.id,
        max_attendees = event.max_attendees,
        "Event created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PATCH /api/v1/events/{id}
///
/// Update an event. Publishing is a status change through this endpoint;
/// capacity changes only happen here as well.
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    if let Some(max_attendees) = input.max_attendees {
        if max_attendees < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "max_attendees must not be negative".into(),
            )));
        }
    }

    let event = EventRepo::update(&state.pool, event_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    Ok(Json(DataResponse { data: event }))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/v1/events/{id}
///
/// Soft-delete an event. Returns 204; 404 if it does not exist.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EventRepo::soft_delete(&state.pool, event_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    tracing::info!(event_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}
