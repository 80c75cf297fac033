// tests/e2e_legal_and_migrations.rs
mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::*;

#[tokio::test]
async fn legal_page_is_created_then_replaced() {
    let app = make_test_app();
    let uri = "/api/legal-content?key=aviso-de-privacidad";

    let (status, body) = app.call(get(uri, None)).await;
    assert_error(status, &body, StatusCode::NOT_FOUND);

    let page = json!({
        "key": "aviso-de-privacidad",
        "title": "Aviso de privacidad",
        "content": "<p>Versión 1</p>"
    });
    let (status, body) = app
        .call(json(Method::PUT, "/api/legal-content", Some(ADMIN_TOKEN), page))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["updatedBy"], "user_admin");

    let page = json!({
        "key": "aviso-de-privacidad",
        "title": "Aviso de privacidad",
        "content": "<p>Versión 2</p>"
    });
    let (status, body) = app
        .call(json(Method::PUT, "/api/legal-content", Some(SUPERADMIN_TOKEN), page))
        .await;
    assert_ok(status, &body, StatusCode::OK);

    let (status, body) = app.call(get(uri, None)).await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["content"], "<p>Versión 2</p>");
    assert_eq!(data["updatedBy"], "user_super");
}

#[tokio::test]
async fn legal_edits_need_manage_legal_content() {
    let app = make_test_app();
    let page = json!({ "key": "terminos", "title": "Términos", "content": "<p>x</p>" });
    let (status, body) = app
        .call(json(Method::PUT, "/api/legal-content", Some(CREATOR_TOKEN), page))
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn slug_migration_fills_missing_slugs_only() {
    let app = make_test_app_with(Seed {
        attorneys: MemoryAttorneyRepo::with(vec![
            AttorneyBuilder::new(1, "Ana Torres").slug("ana-torres").build(),
            AttorneyBuilder::new(2, "José Núñez").build(),
            AttorneyBuilder::new(0x123456, "Ana Torres").build(),
        ]),
        ..Seed::default()
    });

    let (status, body) = app
        .call(request(Method::POST, "/api/admin/migrate-slugs", Some(DEVELOPER_TOKEN), None))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["processed"], 3);
    assert_eq!(data["updated"], 2);
    assert_eq!(data["skipped"], 1);
    assert_eq!(data["errors"].as_array().map(Vec::len), Some(0));

    let mut slugs: Vec<String> = app
        .attorneys
        .snapshot()
        .iter()
        .filter_map(|a| a.slug().map(|s| s.to_string()))
        .collect();
    slugs.sort();
    assert_eq!(slugs, ["ana-torres", "ana-torres-123456", "jose-nunez"]);
}

#[tokio::test]
async fn slug_migration_needs_run_migrations() {
    let app = make_test_app();
    let (status, body) = app
        .call(request(Method::POST, "/api/admin/migrate-slugs", Some(ADMIN_TOKEN), None))
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unreadable_attorneys_are_reported_without_stopping_the_run() {
    let broken = format!("{:024x}", 0xbad);
    let app = make_test_app_with(Seed {
        attorneys: MemoryAttorneyRepo::with(vec![AttorneyBuilder::new(2, "José Núñez").build()])
            .with_unreadable(&broken, "Registro Antiguo"),
        ..Seed::default()
    });

    let (status, body) = app
        .call(request(Method::POST, "/api/admin/migrate-slugs", Some(DEVELOPER_TOKEN), None))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["processed"], 2);
    assert_eq!(data["updated"], 1);
    let errors = data["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains(&broken));

    let (status, body) = app.call(get("/api/attorneys", None)).await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["items"].as_array().map(Vec::len), Some(1));
}
