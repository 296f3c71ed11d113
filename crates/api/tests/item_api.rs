//! HTTP-level integration tests for class and event endpoints, including
//! the availability fields attached to public item representations.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Class CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_class_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/classes",
        serde_json::json!({"title": "Morning Yoga", "max_students": 12}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Morning Yoga");
    assert_eq!(json["data"]["max_students"], 12);
    assert_eq!(json["data"]["is_active"], true);
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_class_negative_capacity_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/classes",
        serde_json::json!({"title": "Impossible", "max_students": -1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_class_includes_availability(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/classes",
            serde_json::json!({"title": "With Numbers", "max_students": 8}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/classes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["max_students"], 8);
    assert_eq!(json["data"]["reserved"], 0);
    assert_eq!(json["data"]["spots_left"], 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_class_is_not_offered(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/classes",
            serde_json::json!({"title": "Hidden", "max_students": 8, "is_active": false}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/classes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And it does not appear in the public listing either.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/classes").await).await;
    let listed = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"].as_i64() == Some(id));
    assert!(!listed, "inactive class must not be listed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_class_capacity(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/classes",
            serde_json::json!({"title": "Growing", "max_students": 5}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/classes/{id}"),
        serde_json::json!({"max_students": 20}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["max_students"], 20);

    // The public representation reflects the new capacity.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/classes/{id}")).await).await;
    assert_eq!(json["data"]["spots_left"], 20);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_class_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/classes",
            serde_json::json!({"title": "Doomed", "max_students": 5}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/classes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/classes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Event lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_offered_only_once_published(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/events",
            serde_json::json!({"title": "Gala", "max_attendees": 100}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();
    // Draft by default.
    assert_eq!(created["data"]["status_id"], 1);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/events/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Publish, then the event is offered with full availability.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/events/{id}"),
        serde_json::json!({"status_id": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/events/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["reserved"], 0);
    assert_eq!(json["data"]["spots_left"], 100);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_events_shows_only_published(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/events",
        serde_json::json!({"title": "Draft Only", "max_attendees": 10}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/events",
        serde_json::json!({"title": "Public", "max_attendees": 10, "status_id": 2}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/events").await).await;
    let titles: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect();
    assert!(titles.contains(&"Public".to_string()));
    assert!(!titles.contains(&"Draft Only".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_event_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/events/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
