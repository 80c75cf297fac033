// tests/e2e_blog.rs
mod support;

use axum::http::{Method, StatusCode};
use chrono::Duration;
use serde_json::{Value, json};
use support::*;

fn seeded() -> TestApp {
    let now = fixed_now();
    make_test_app_with(Seed {
        posts: MemoryBlogPostRepo::with(vec![
            PostBuilder::new(10, "Reforma fiscal 2025", "user_creator")
                .slug("reforma-fiscal")
                .category(70)
                .tags(&["Fiscal"])
                .published(now - Duration::days(10))
                .build(),
            PostBuilder::new(11, "Nuevas reglas laborales", "user_creator_2")
                .slug("reglas-laborales")
                .tags(&["fiscal", "laboral"])
                .published(now - Duration::days(5))
                .build(),
            PostBuilder::new(12, "Borrador", "user_creator")
                .slug("borrador")
                .build(),
            PostBuilder::new(13, "Programado pasado", "user_admin")
                .slug("programado-pasado")
                .scheduled(now - Duration::hours(1)),
            PostBuilder::new(14, "Programado futuro", "user_admin")
                .slug("programado-futuro")
                .scheduled(now + Duration::days(2)),
        ]),
        categories: MemoryCategoryRepo::with(vec![
            category(70, "Fiscal", None, true),
            category(71, "Impuestos locales", Some(70), true),
            category(72, "Archivo", Some(70), false),
        ]),
        ..Seed::default()
    })
}

fn slugs(items: &Value) -> Vec<String> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["slug"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn public_list_shows_published_and_due_scheduled_posts() {
    let app = seeded();
    let (status, body) = app.call(get("/api/blog/posts", None)).await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["total"], 3);
    assert_eq!(
        slugs(&data["items"]),
        ["programado-pasado", "reglas-laborales", "reforma-fiscal"]
    );
    assert_eq!(data["hasNext"], false);
}

#[tokio::test]
async fn public_list_filters_by_tag_and_category_slug() {
    let app = seeded();
    let (status, body) = app.call(get("/api/blog/posts?tag=FISCAL", None)).await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(slugs(&data["items"]), ["reglas-laborales", "reforma-fiscal"]);

    let (status, body) = app
        .call(get("/api/blog/posts?category=categoria-70", None))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(slugs(&data["items"]), ["reforma-fiscal"]);

    let (status, body) = app
        .call(get("/api/blog/posts?category=no-existe", None))
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hidden_posts_are_not_found_publicly() {
    let app = seeded();
    for slug in ["borrador", "programado-futuro"] {
        let (status, body) = app.call(get(&format!("/api/blog/posts/{slug}"), None)).await;
        assert_error(status, &body, StatusCode::NOT_FOUND);
    }
    let (status, body) = app
        .call(get("/api/blog/posts/programado-pasado", None))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["status"], "SCHEDULED");
}

#[tokio::test]
async fn views_are_counted_for_visible_posts_only() {
    let app = seeded();
    for expected in [1, 2] {
        let (status, body) = app
            .call(request(Method::POST, "/api/blog/posts/reforma-fiscal/view", None, None))
            .await;
        let data = assert_ok(status, &body, StatusCode::OK);
        assert_eq!(data["viewCount"], expected);
    }

    let (status, body) = app
        .call(request(Method::POST, "/api/blog/posts/borrador/view", None, None))
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn related_posts_share_tags_or_category() {
    let app = seeded();
    let (status, body) = app
        .call(get("/api/blog/posts/reforma-fiscal/related", None))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(slugs(&data), ["reglas-laborales"]);
}

#[tokio::test]
async fn category_tree_and_children_skip_inactive() {
    let app = seeded();
    let (status, body) = app.call(get("/api/blog/categories/tree", None)).await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data.as_array().unwrap().len(), 1);
    assert_eq!(data[0]["children"].as_array().unwrap().len(), 1);
    assert_eq!(data[0]["children"][0]["name"], "Impuestos locales");

    let uri = format!("/api/blog/categories/{}/children", id(70));
    let (status, body) = app.call(get(&uri, None)).await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data.as_array().unwrap().len(), 1);

    let (status, body) = app
        .call(get("/api/admin/blog/categories", Some(ADMIN_TOKEN)))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn creators_only_see_their_own_posts_in_the_dashboard() {
    let app = seeded();
    let (status, body) = app
        .call(get("/api/admin/blog/posts?authorId=user_admin", Some(CREATOR_TOKEN)))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["total"], 2);
    let mut found = slugs(&data["items"]);
    found.sort();
    assert_eq!(found, ["borrador", "reforma-fiscal"]);

    let (status, body) = app
        .call(get("/api/admin/blog/posts", Some(ADMIN_TOKEN)))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["total"], 5);
}

#[tokio::test]
async fn create_post_assigns_author_and_unique_slug() {
    let app = seeded();
    let payload = json!({ "title": "Guía de amparo", "content": "<p>Pasos del juicio</p>" });

    let (status, body) = app
        .call(json(Method::POST, "/api/admin/blog/posts", Some(CREATOR_TOKEN), payload.clone()))
        .await;
    let first = assert_ok(status, &body, StatusCode::CREATED);
    assert_eq!(first["slug"], "guia-de-amparo");
    assert_eq!(first["status"], "DRAFT");
    assert_eq!(first["authorId"], "user_creator");

    let (status, body) = app
        .call(json(Method::POST, "/api/admin/blog/posts", Some(CREATOR_TOKEN), payload))
        .await;
    let second = assert_ok(status, &body, StatusCode::CREATED);
    assert_eq!(second["slug"], "guia-de-amparo-1");
}

#[tokio::test]
async fn create_post_rejects_unknown_category() {
    let app = seeded();
    let payload = json!({ "title": "Sin categoría", "content": "<p>x</p>", "category": id(99).to_string() });
    let (status, body) = app
        .call(json(Method::POST, "/api/admin/blog/posts", Some(ADMIN_TOKEN), payload))
        .await;
    let message = assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert!(message.contains("does not exist"), "{message}");
}

#[tokio::test]
async fn editing_someone_elses_post_needs_edit_all_content() {
    let app = seeded();
    let uri = format!("/api/admin/blog/posts/{}", id(10));
    let change = json!({ "excerpt": "Resumen actualizado" });

    let (status, body) = app
        .call(json(Method::PUT, &uri, Some(OTHER_CREATOR_TOKEN), change.clone()))
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = app
        .call(json(Method::PUT, &uri, Some(ADMIN_TOKEN), change))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["excerpt"], "Resumen actualizado");
    assert_eq!(data["slug"], "reforma-fiscal");
}

#[tokio::test]
async fn retitling_regenerates_the_slug() {
    let app = seeded();
    let uri = format!("/api/admin/blog/posts/{}", id(12));
    let (status, body) = app
        .call(json(Method::PUT, &uri, Some(CREATOR_TOKEN), json!({ "title": "Guía laboral" })))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["slug"], "guia-laboral");
}

#[tokio::test]
async fn delete_requires_delete_content() {
    let app = seeded();
    let uri = format!("/api/admin/blog/posts?id={}", id(12));

    let (status, body) = app
        .call(request(Method::DELETE, &uri, Some(CREATOR_TOKEN), None))
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);

    let (status, _) = app
        .call(request(Method::DELETE, &uri, Some(ADMIN_TOKEN), None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(app.posts.snapshot().iter().all(|p| p.id != id(12)));
}

#[tokio::test]
async fn status_changes_follow_publish_rules() {
    let app = seeded();
    let uri = format!("/api/admin/blog/posts/{}/status", id(12));

    let (status, body) = app
        .call(json(Method::POST, &uri, Some(DEVELOPER_TOKEN), json!({ "action": "publish" })))
        .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);

    let past = (fixed_now() - Duration::days(1)).to_rfc3339();
    let (status, body) = app
        .call(json(
            Method::POST,
            &uri,
            Some(CREATOR_TOKEN),
            json!({ "action": "schedule", "scheduledAt": past }),
        ))
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .call(json(Method::POST, &uri, Some(CREATOR_TOKEN), json!({ "action": "publish" })))
        .await;
    let data = assert_ok(status, &body, StatusCode::OK);
    assert_eq!(data["status"], "PUBLISHED");
    assert!(data["publishedAt"].is_string());

    let (status, body) = app.call(get("/api/blog/posts/borrador", None)).await;
    assert_ok(status, &body, StatusCode::OK);
}

#[tokio::test]
async fn categories_cannot_move_under_their_children() {
    let app = seeded();
    let uri = format!("/api/admin/blog/categories/{}", id(70));
    let payload = json!({ "parentId": id(71).to_string() });
    let (status, body) = app
        .call(json(Method::PUT, &uri, Some(ADMIN_TOKEN), payload))
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert!(
        app.categories
            .snapshot()
            .iter()
            .any(|c| c.id == id(70) && c.parent_id.is_none())
    );
}

#[tokio::test]
async fn long_titles_still_get_collision_suffixes() {
    let app = seeded();
    let title = "Maß ".repeat(50);
    let payload = json!({ "title": title, "content": "<p>Texto</p>" });

    let (status, body) = app
        .call(json(Method::POST, "/api/admin/blog/posts", Some(CREATOR_TOKEN), payload.clone()))
        .await;
    let first = assert_ok(status, &body, StatusCode::CREATED);
    let slug = first["slug"].as_str().unwrap().to_string();
    assert!(slug.starts_with("mass-mass"));
    assert!(slug.len() <= 192);

    let (status, body) = app
        .call(json(Method::POST, "/api/admin/blog/posts", Some(CREATOR_TOKEN), payload))
        .await;
    let second = assert_ok(status, &body, StatusCode::CREATED);
    assert_eq!(second["slug"], format!("{slug}-1"));
}
