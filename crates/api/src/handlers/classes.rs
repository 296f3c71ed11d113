//! Handlers for the `/classes` resource.
//!
//! Public reads return only bookable classes, each carrying computed
//! `reserved` and `spots_left` figures alongside `max_students`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use seatwise_core::error::CoreError;
use seatwise_core::types::DbId;
use seatwise_db::models::class::{CreateClass, UpdateClass};
use seatwise_db::repositories::ClassRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /api/v1/classes
///
/// List bookable classes with live availability. Supports optional
/// `limit` and `offset` query parameters.
pub async fn list_classes(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let classes = ClassRepo::list_bookable(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: classes }))
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/v1/classes/{id}
///
/// Get a single bookable class with live availability. A class that is
/// missing, inactive, or outside its offering window is simply not
/// offered: 404.
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let class = ClassRepo::find_bookable_with_availability(&state.pool, class_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id: class_id,
        }))?;

    Ok(Json(DataResponse { data: class }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/classes
///
/// Create a new class. Returns 201 with the created row.
pub async fn create_class(
    State(state): State<AppState>,
    Json(input): Json<CreateClass>,
) -> AppResult<impl IntoResponse> {
    if input.max_students < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "max_students must not be negative".into(),
        )));
    }

    let class = ClassRepo::create(&state.pool, &input).await?;

    tracing::info!(
        class_id = class.id,
        max_students = class.max_students,
        "Class created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: class })))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PATCH /api/v1/classes/{id}
///
/// Update a class. Capacity changes only happen here — an explicit
/// update — never as a side effect of booking traffic.
pub async fn update_class(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
    Json(input): Json<UpdateClass>,
) -> AppResult<impl IntoResponse> {
    if let Some(max_students) = input.max_students {
        if max_students < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "max_students must not be negative".into(),
            )));
        }
    }

    let class = ClassRepo::update(&state.pool, class_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id: class_id,
        }))?;

    Ok(Json(DataResponse { data: class }))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/v1/classes/{id}
///
/// Soft-delete a class. Returns 204; 404 if it does not exist.
pub async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ClassRepo::soft_delete(&state.pool, class_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id: class_id,
        }));
    }

    tracing::info!(class_id, "Class deleted");

    Ok(StatusCode::NO_CONTENT)
}
