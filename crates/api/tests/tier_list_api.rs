//! HTTP-level integration tests for the tier list endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_list(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/tierlists", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["result"].clone()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_201_with_skeleton(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tierlists",
        serde_json::json!({
            "title": "  Snacks ",
            "description": "Crunchy things",
            "imageSource": "https://example.com/snacks.png"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let list = &json["result"];
    assert_eq!(list["title"], "Snacks");
    assert_eq!(list["description"], "Crunchy things");
    assert_eq!(list["imageSource"], "https://example.com/snacks.png");
    assert!(list["id"].is_string());

    let tiers = list["tiers"].as_array().unwrap();
    let labels: Vec<&str> = tiers.iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(labels, ["S", "A", "B", "C", "D"]);
    assert_eq!(tiers[0]["color"], "#ff7e7f");
    assert!(tiers.iter().all(|t| t["items"].as_array().unwrap().is_empty()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_blank_title_returns_400(pool: PgPool) {
    for body in [
        serde_json::json!({"title": "   "}),
        serde_json::json!({"description": "no title at all"}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/tierlists", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["error"], "Title cannot be empty");
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/tierlists").await).await;
    assert!(json["result"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mistyped_body_returns_400_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response =
        post_json(app, "/api/v1/tierlists", serde_json::json!({"title": 42})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_id(pool: PgPool) {
    let created = create_list(&pool, serde_json::json!({"title": "Get Me"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/tierlists/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["result"], created);
    assert!(json["result"].get("description").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_id_returns_404(pool: PgPool) {
    let id = uuid::Uuid::new_v4();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/tierlists/{id}")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("No tier list found with id {id}"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_malformed_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tierlists/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tier_lists(pool: PgPool) {
    let a = create_list(&pool, serde_json::json!({"title": "P1"})).await;
    let b = create_list(&pool, serde_json::json!({"title": "P2"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tierlists").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let mut ids: Vec<String> = json["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    let mut expected = vec![
        a["id"].as_str().unwrap().to_string(),
        b["id"].as_str().unwrap().to_string(),
    ];
    expected.sort();
    assert_eq!(ids, expected);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_whole_tier_list(pool: PgPool) {
    let created = create_list(&pool, serde_json::json!({"title": "Original"})).await;
    let id = created["id"].as_str().unwrap().to_string();

    let replacement = serde_json::json!({
        "id": id,
        "title": "Updated",
        "imageSource": "https://example.com/new.png",
        "tiers": [
            {
                "title": "Top",
                "color": "gold",
                "items": [
                    {"title": "First"},
                    {"title": "Second", "description": "close call"}
                ]
            },
            {"title": "Bottom", "description": "meh", "color": "grey", "items": []}
        ]
    });

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/tierlists/{id}"), replacement.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["result"], replacement);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/v1/tierlists/{id}")).await).await;
    assert_eq!(fetched["result"], replacement);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_body_without_id_is_accepted(pool: PgPool) {
    let created = create_list(&pool, serde_json::json!({"title": "No id needed"})).await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/tierlists/{id}"),
        serde_json::json!({
            "title": "Renamed",
            "tiers": [{"title": "S", "color": "#ff7e7f", "items": [{"title": "Only"}]}]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["id"], id.as_str());
    assert_eq!(json["result"]["title"], "Renamed");
    assert_eq!(json["result"]["tiers"][0]["items"][0]["title"], "Only");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_body_id_is_ignored_in_favour_of_path(pool: PgPool) {
    let created = create_list(&pool, serde_json::json!({"title": "Target"})).await;
    let bystander = create_list(&pool, serde_json::json!({"title": "Bystander"})).await;
    let id = created["id"].as_str().unwrap().to_string();
    let other = bystander["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/tierlists/{id}"),
        serde_json::json!({"id": other, "title": "Hit", "tiers": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["result"]["id"], id.as_str());

    let app = common::build_test_app(pool);
    let untouched = body_json(get(app, &format!("/api/v1/tierlists/{other}")).await).await;
    assert_eq!(untouched["result"], bystander);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_with_control_characters_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tierlists",
        serde_json::json!({"title": "Nul\u{0}byte"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Title must not contain control characters"
    );

    let created = create_list(&pool, serde_json::json!({"title": "Clean"})).await;
    let id = created["id"].as_str().unwrap().to_string();
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/tierlists/{id}"),
        serde_json::json!({"title": "Nul\u{0}byte", "tiers": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_id_returns_404(pool: PgPool) {
    let id = uuid::Uuid::new_v4();
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/tierlists/{id}"),
        serde_json::json!({"id": id, "title": "Nobody", "tiers": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_204_then_404(pool: PgPool) {
    let created = create_list(&pool, serde_json::json!({"title": "Delete Me"})).await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/tierlists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/tierlists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/tierlists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
