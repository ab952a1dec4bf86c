//! HTTP-level integration tests for the `/modules` resource, including
//! the reference-resolution ordering the mapper layer guarantees.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_course(pool: &PgPool, title: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/courses",
        serde_json::json!({"title": title, "description": "course"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

async fn create_module(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/modules", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Module CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_root_module(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;

    let module = create_module(
        &pool,
        serde_json::json!({"title": "M1", "description": "d", "course_id": course_id}),
    )
    .await;

    assert!(module["id"].is_string());
    assert_eq!(module["course_id"].as_str().unwrap(), course_id);
    assert!(module["parent_module_id"].is_null());
    // Position defaults to 0 when omitted.
    assert_eq!(module["position"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_nested_module(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;
    let parent = create_module(
        &pool,
        serde_json::json!({"title": "Parent", "description": "d", "course_id": course_id}),
    )
    .await;
    let parent_id = parent["id"].as_str().unwrap();

    let child = create_module(
        &pool,
        serde_json::json!({
            "title": "Child",
            "description": "d",
            "position": 1,
            "course_id": course_id,
            "parent_module_id": parent_id
        }),
    )
    .await;

    assert_eq!(child["parent_module_id"].as_str().unwrap(), parent_id);
    assert_eq!(child["position"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_get_round_trip(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;
    let created = create_module(
        &pool,
        serde_json::json!({"title": "M", "description": "d", "course_id": course_id}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/v1/modules/{id}")).await).await;
    assert_eq!(fetched, created);
}

// ---------------------------------------------------------------------------
// Reference resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_module_with_unknown_course_returns_404(pool: PgPool) {
    let bad_course = uuid::Uuid::new_v4();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/modules",
        serde_json::json!({"title": "M", "description": "d", "course_id": bad_course}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(
        json["error_message"],
        format!("Course with id \"{bad_course}\" not found")
    );
    assert_eq!(json["status"], 404);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_is_resolved_before_parent(pool: PgPool) {
    // Both references dangle: the course error must win.
    let bad_course = uuid::Uuid::new_v4();
    let bad_parent = uuid::Uuid::new_v4();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/modules",
        serde_json::json!({
            "title": "M",
            "description": "d",
            "course_id": bad_course,
            "parent_module_id": bad_parent
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(
        json["error_message"],
        format!("Course with id \"{bad_course}\" not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_parent_with_valid_course_returns_404(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;
    let bad_parent = uuid::Uuid::new_v4();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/modules",
        serde_json::json!({
            "title": "M",
            "description": "d",
            "course_id": course_id,
            "parent_module_id": bad_parent
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(
        json["error_message"],
        format!("Module with id \"{bad_parent}\" not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_null_parent_never_triggers_a_parent_lookup(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;

    // Explicit null parent behaves exactly like an omitted one.
    let module = create_module(
        &pool,
        serde_json::json!({
            "title": "M",
            "description": "d",
            "course_id": course_id,
            "parent_module_id": null
        }),
    )
    .await;
    assert!(module["parent_module_id"].is_null());
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_module_is_full_replacement(pool: PgPool) {
    let course_a = create_course(&pool, "Course A").await;
    let course_b = create_course(&pool, "Course B").await;
    let created = create_module(
        &pool,
        serde_json::json!({"title": "Old", "description": "old", "course_id": course_a}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/modules/{id}"),
        serde_json::json!({
            "title": "New",
            "description": "new",
            "position": 7,
            "course_id": course_b
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"].as_str().unwrap(), id);
    assert_eq!(json["title"], "New");
    assert_eq!(json["position"], 7);
    assert_eq!(json["course_id"].as_str().unwrap(), course_b);
    assert!(json["parent_module_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_module_reports_the_module_not_the_course(pool: PgPool) {
    // The module's own existence is verified before its references are
    // resolved, so a missing module wins over a dangling course id.
    let bad_module = uuid::Uuid::new_v4();
    let bad_course = uuid::Uuid::new_v4();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/modules/{bad_module}"),
        serde_json::json!({"title": "M", "description": "d", "course_id": bad_course}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(
        json["error_message"],
        format!("Module with id \"{bad_module}\" not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_module_with_unknown_course_returns_404(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;
    let created = create_module(
        &pool,
        serde_json::json!({"title": "M", "description": "d", "course_id": course_id}),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let bad_course = uuid::Uuid::new_v4();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/modules/{id}"),
        serde_json::json!({"title": "M", "description": "d", "course_id": bad_course}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(
        json["error_message"],
        format!("Course with id \"{bad_course}\" not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_module(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;
    let created = create_module(
        &pool,
        serde_json::json!({"title": "M", "description": "d", "course_id": course_id}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/modules/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/modules/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/modules/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_position_is_rejected(pool: PgPool) {
    let course_id = create_course(&pool, "Course").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/modules",
        serde_json::json!({
            "title": "M",
            "description": "d",
            "position": -1,
            "course_id": course_id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
