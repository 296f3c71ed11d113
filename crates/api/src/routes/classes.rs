//! Route definitions for the `/classes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

/// Routes mounted at `/classes`.
///
/// ```text
/// GET    /         -> list_classes
/// POST   /         -> create_class
/// GET    /{id}     -> get_class
/// PATCH  /{id}     -> update_class
/// DELETE /{id}     -> delete_class
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(classes::list_classes).post(classes::create_class))
        .route(
            "/{id}",
            get(classes::get_class)
                .patch(classes::update_class)
                .delete(classes::delete_class),
        )
}
