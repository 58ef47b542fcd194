//! HTTP-level integration tests for the `/places` resource.
//!
//! Focuses on the optional `location` column: omitted on create it stays
//! NULL, and a PUT that leaves it out clears it (PUT is a full replace).

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_place_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/places",
        json!({"name": "Central Park", "location": "New York"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Central Park");
    assert_eq!(json["location"], "New York");
    assert!(json["id"].is_number());
}

#[sqlx::test]
async fn test_create_place_without_location_stores_null(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json(app, "/places", json!({"name": "Harbor"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["location"].is_null());
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let fetched = body_json(get(app, &format!("/places/{id}")).await).await;
    assert!(fetched["location"].is_null());
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_get_place_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let create_resp = post_json(
        app,
        "/places",
        json!({"name": "Museum", "location": "Old Town"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let response = get(app, &format!("/places/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Museum");
    assert_eq!(json["location"], "Old Town");
}

#[sqlx::test]
async fn test_get_nonexistent_place_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/places/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Place with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_update_place(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let create_resp = post_json(
        app,
        "/places",
        json!({"name": "Harbor", "location": "Seafront"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let response = put_json(
        app,
        &format!("/places/{id}"),
        json!({"name": "North Harbor", "location": "North Seafront"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "North Harbor");
    assert_eq!(json["location"], "North Seafront");
}

#[sqlx::test]
async fn test_update_omitting_location_clears_it(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let create_resp = post_json(
        app,
        "/places",
        json!({"name": "Harbor", "location": "Seafront"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    // PUT is a full replace: the omitted location becomes NULL.
    let app = common::build_test_app(pool.clone()).await;
    let response = put_json(app, &format!("/places/{id}"), json!({"name": "Harbor"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["location"].is_null());

    let app = common::build_test_app(pool).await;
    let fetched = body_json(get(app, &format!("/places/{id}")).await).await;
    assert!(fetched["location"].is_null());
}

#[sqlx::test]
async fn test_update_nonexistent_place_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = put_json(app, "/places/999999", json!({"name": "Ghost"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_delete_place_returns_entity(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let create_resp = post_json(
        app,
        "/places",
        json!({"name": "Museum", "location": "Old Town"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let response = delete(app, &format!("/places/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Museum");

    let app = common::build_test_app(pool).await;
    let response = get(app, &format!("/places/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_delete_nonexistent_place_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = delete(app, "/places/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_list_places(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    post_json(app, "/places", json!({"name": "P1"})).await;

    let app = common::build_test_app(pool.clone()).await;
    post_json(app, "/places", json!({"name": "P2", "location": "L2"})).await;

    let app = common::build_test_app(pool).await;
    let response = get(app, "/places").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}
