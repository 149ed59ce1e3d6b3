mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{setup, token_for};

#[tokio::test]
async fn deleting_department_keeps_members_and_their_assets() {
    let app = setup().await;
    let it = app.create_department("IT").await;
    let alice = app.create_user("alice", false, false, Some(it)).await;
    let laptop = app.create_asset("MacBook", "LAPTOP", "1500.00", Some(alice.id)).await;

    app.state.department_service.delete(it).await.unwrap();

    let department_id: Option<Uuid> =
        sqlx::query_scalar("SELECT department_id FROM users WHERE id = $1")
            .bind(alice.id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(department_id, None);

    let asset = app.state.asset_service.get_by_id(laptop).await.unwrap();
    assert_eq!(asset.assigned_to, Some(alice.id));
    assert_eq!(app.count("users").await, 1);
    assert_eq!(app.count("departments").await, 0);

    app.teardown().await;
}

#[tokio::test]
async fn deleting_asset_removes_only_its_logs() {
    let app = setup().await;
    let doomed = app.create_asset("Old phone", "PHONE", "300.00", None).await;
    let kept = app.create_asset("New phone", "PHONE", "900.00", None).await;
    app.create_log(doomed, "Screen", "90.00").await;
    app.create_log(doomed, "Battery", "40.00").await;
    let survivor = app.create_log(kept, "Case", "10.00").await;

    app.state.asset_service.delete(doomed).await.unwrap();

    let remaining: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM maintenance_logs")
        .fetch_all(&app.pool)
        .await
        .unwrap();
    assert_eq!(remaining, vec![survivor]);

    let err = app.state.asset_service.delete(doomed).await.unwrap_err();
    assert!(matches!(err, asset_tracker::error::Error::NotFound(_)));

    app.teardown().await;
}

#[tokio::test]
async fn deleting_user_unassigns_assets() {
    let app = setup().await;
    let bob = app.create_user("bob", false, false, None).await;
    let asset = app.create_asset("Monitor", "MONITOR", "200.00", Some(bob.id)).await;

    app.state.user_service.delete(bob.id).await.unwrap();

    let asset = app.state.asset_service.get_by_id(asset).await.unwrap();
    assert_eq!(asset.assigned_to, None);

    app.teardown().await;
}

#[tokio::test]
async fn admin_routes_apply_delete_rules() {
    let app = setup().await;
    let root = app.create_user("root", false, true, None).await;
    let token = token_for(&root);

    let resp = app
        .post_json("/admin/departments/", Some(&token), json!({"name": "Ops"}))
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let ops: Uuid = resp.json()["id"].as_str().unwrap().parse().unwrap();

    let dup = app
        .post_json("/admin/departments/", Some(&token), json!({"name": "Ops"}))
        .await;
    assert_eq!(dup.status, StatusCode::BAD_REQUEST);

    let carol = app.create_user("carol", false, false, Some(ops)).await;
    let asset = app.create_asset("Laptop", "LAPTOP", "999.99", Some(carol.id)).await;
    app.create_log(asset, "Fan", "15.00").await;

    let detail = app.get(&format!("/admin/assets/{asset}/"), Some(&token)).await;
    assert_eq!(detail.status, StatusCode::OK);
    let detail = detail.json();
    assert_eq!(detail["display"], "Laptop (Laptop)");
    assert_eq!(detail["maintenance_logs"].as_array().unwrap().len(), 1);

    let resp = app.delete(&format!("/admin/departments/{ops}/"), Some(&token)).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    let users = app.get("/admin/users/", Some(&token)).await.json();
    let carol_row = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "carol")
        .unwrap();
    assert!(carol_row["department_id"].is_null());

    let resp = app.delete(&format!("/admin/assets/{asset}/"), Some(&token)).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert_eq!(app.count("maintenance_logs").await, 0);
    assert_eq!(app.count("users").await, 2);

    let resp = app.delete(&format!("/admin/assets/{asset}/"), Some(&token)).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    app.teardown().await;
}

#[tokio::test]
async fn admin_routes_require_superuser() {
    let app = setup().await;
    let manager = app.create_user("manager", true, false, None).await;

    let resp = app
        .post_json(
            "/admin/departments/",
            Some(&token_for(&manager)),
            json!({"name": "Ops"}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(app.count("departments").await, 0);

    app.teardown().await;
}

#[tokio::test]
async fn updating_asset_refreshes_updated_at_only() {
    let app = setup().await;
    let root = app.create_user("root", false, true, None).await;
    let asset_id = app.create_asset("Desk", "FURNITURE", "100.00", Some(root.id)).await;
    let before = app.state.asset_service.get_by_id(asset_id).await.unwrap();

    let resp = app
        .json_request(
            "PATCH",
            &format!("/admin/assets/{asset_id}/"),
            Some(&token_for(&root)),
            json!({"cost": "120.00", "assigned_to": null}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["cost"], "120.00");
    assert!(body["assigned_to"].is_null());
    assert_eq!(body["name"], "Desk");

    let after = app.state.asset_service.get_by_id(asset_id).await.unwrap();
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);

    app.teardown().await;
}
