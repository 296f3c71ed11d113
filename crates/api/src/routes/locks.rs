//! Route definitions for the `/locks` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::locks;
use crate::state::AppState;

/// Routes mounted at `/locks`.
///
/// ```text
/// POST   /         -> acquire_lock
/// GET    /{id}     -> get_lock
/// DELETE /{id}     -> release_lock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(locks::acquire_lock))
        .route("/{id}", get(locks::get_lock).delete(locks::release_lock))
}
