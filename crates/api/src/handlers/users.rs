//! Handlers for the `/users` resource.
//!
//! Bare user records only — bookings need someone to belong to. No
//! authentication lives in this service.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use seatwise_core::error::CoreError;
use seatwise_core::types::DbId;
use seatwise_db::models::user::CreateUser;
use seatwise_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/users
///
/// Create a new user. Returns 201 with the created row; a duplicate email
/// is a 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    if input.display_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "display_name must not be empty".into(),
        )));
    }

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(DataResponse { data: user }))
}
