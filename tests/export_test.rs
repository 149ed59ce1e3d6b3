mod common;

use axum::http::{header, StatusCode};

use common::setup;

#[tokio::test]
async fn exports_every_asset_as_csv() {
    let app = setup().await;
    let alice = app.create_user("alice", false, false, None).await;
    app.create_asset("MacBook", "LAPTOP", "100.00", Some(alice.id)).await;
    app.create_asset("Monitor", "MONITOR", "250.50", None).await;
    app.create_asset("Desk", "FURNITURE", "0.00", None).await;

    // No token: the export is open.
    let resp = app.get("/export/csv/", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.headers[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        resp.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"asset_report.csv\""
    );

    let text = resp.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Asset Name,Type,Cost,Assigned User");
    assert!(lines.contains(&"MacBook,Laptop,100.00,alice"));
    assert!(lines.contains(&"Monitor,Monitor,250.50,Unassigned"));
    assert!(lines.contains(&"Desk,Furniture,0.00,Unassigned"));

    app.teardown().await;
}

#[tokio::test]
async fn deleted_assignee_exports_as_unassigned() {
    let app = setup().await;
    let leaver = app.create_user("leaver", false, false, None).await;
    app.create_asset("Pixel", "PHONE", "499.00", Some(leaver.id)).await;

    app.state.user_service.delete(leaver.id).await.unwrap();

    let text = app.get("/export/csv/", None).await.text();
    assert!(text.lines().any(|l| l == "Pixel,Phone,499.00,Unassigned"));

    app.teardown().await;
}
