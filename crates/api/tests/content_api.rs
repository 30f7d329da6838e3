//! HTTP-level integration tests for the public portfolio content:
//! about, projects (with images), skills, and site sections.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth};
use portfolio_core::roles::{ROLE_ADMIN, ROLE_WRITER};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

/// The about singleton is seeded by migration and publicly readable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_about_public_read(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/about").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 1);
}

/// Admin can update the about section; both languages round-trip.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_about_update(pool: PgPool) {
    let token = auth_token(&pool, "aboutadmin", ROLE_ADMIN).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "full_name_en": "Sara Haddad",
        "full_name_ar": "سارة حداد",
        "bio_en": "Backend engineer."
    });
    let response = put_json_auth(app, "/api/v1/about", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/about").await).await;
    assert_eq!(json["data"]["full_name_en"], "Sara Haddad");
    assert_eq!(json["data"]["full_name_ar"], "سارة حداد");
}

/// Updating the about section requires the admin role.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_about_update_requires_admin(pool: PgPool) {
    let token = auth_token(&pool, "aboutwriter", ROLE_WRITER).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "full_name_en": "Nope" });
    let response = put_json_auth(app, "/api/v1/about", body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Create a project via the API, returning its JSON.
async fn create_project(pool: &PgPool, token: &str, title: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title_en": title });
    let response = post_json_auth(app, "/api/v1/projects", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// A created project gets a slug derived from its English title and is
/// publicly resolvable by that slug.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_create_and_public_detail(pool: PgPool) {
    let token = auth_token(&pool, "projadmin", ROLE_ADMIN).await;

    let json = create_project(&pool, &token, "Realtime Chat App").await;
    assert_eq!(json["data"]["slug"], "realtime-chat-app");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/realtime-chat-app").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["project"]["title_en"], "Realtime Chat App");
    assert!(json["data"]["images"].is_array());
}

/// Two projects with the same title get distinct numbered slugs.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_slug_collision(pool: PgPool) {
    let token = auth_token(&pool, "slugadmin", ROLE_ADMIN).await;

    let first = create_project(&pool, &token, "Portfolio Site").await;
    let second = create_project(&pool, &token, "Portfolio Site").await;

    assert_eq!(first["data"]["slug"], "portfolio-site");
    assert_eq!(second["data"]["slug"], "portfolio-site-2");
}

/// Hidden projects are excluded from the anonymous list but shown to
/// authenticated callers requesting `?include_hidden=true`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_visibility_gating(pool: PgPool) {
    let token = auth_token(&pool, "visadmin", ROLE_ADMIN).await;

    let created = create_project(&pool, &token, "Secret Project").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "is_visible": false });
    let response = put_json_auth(app, &format!("/api/v1/projects/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Anonymous list: hidden project absent.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Anonymous detail by slug: 404.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/projects/secret-project").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Authenticated with include_hidden: present.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(app, "/api/v1/projects?include_hidden=true", &token).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Anonymous with include_hidden: the flag is ignored.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects?include_hidden=true").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

/// Project images are scoped to their parent project.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_images(pool: PgPool) {
    let token = auth_token(&pool, "imgadmin", ROLE_ADMIN).await;

    let created = create_project(&pool, &token, "Gallery Project").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "path": "/uploads/shot-1.png",
        "caption_en": "Home page"
    });
    let response =
        post_json_auth(app, &format!("/api/v1/projects/{id}/images"), body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/projects/{id}/images")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["caption_en"], "Home page");

    // Adding an image to a nonexistent project is a 404.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "path": "/uploads/orphan.png" });
    let response = post_json_auth(app, "/api/v1/projects/99999/images", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Skill creation is admin-only; writers are forbidden.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_skill_rbac(pool: PgPool) {
    let writer_token = auth_token(&pool, "skillwriter", ROLE_WRITER).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name_en": "Rust", "proficiency": 90 });
    let response = post_json_auth(app, "/api/v1/skills", body, &writer_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin_token = auth_token(&pool, "skilladmin", ROLE_ADMIN).await;
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name_en": "Rust", "proficiency": 90 });
    let response = post_json_auth(app, "/api/v1/skills", body, &admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/skills").await).await;
    assert_eq!(json["data"][0]["name_en"], "Rust");
}

/// Proficiency outside 0..=100 is rejected with a bilingual 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_skill_validation(pool: PgPool) {
    let token = auth_token(&pool, "skillval", ROLE_ADMIN).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name_en": "Go", "proficiency": 150 });
    let response = post_json_auth(app, "/api/v1/skills", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
    assert!(json["error_ar"].is_string());
}

// ---------------------------------------------------------------------------
// Site sections
// ---------------------------------------------------------------------------

/// Sections are seeded by migration; hiding one removes it from the
/// public navigation, and reordering is reflected in the list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_site_sections_flow(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/site-sections").await).await;
    let sections = json["data"].as_array().unwrap().clone();
    assert!(sections.len() >= 5, "sections must be seeded");

    let token = auth_token(&pool, "navadmin", ROLE_ADMIN).await;
    let first_id = sections[0]["id"].as_i64().unwrap();

    // Hide the first section.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "is_visible": false });
    let response =
        put_json_auth(app, &format!("/api/v1/site-sections/{first_id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/site-sections").await).await;
    let visible = json["data"].as_array().unwrap();
    assert_eq!(visible.len(), sections.len() - 1);
    assert!(visible.iter().all(|s| s["id"].as_i64() != Some(first_id)));
}

/// Admins can add custom sections beyond the seeded set and remove them
/// again; section keys stay unique.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_site_section_create_and_delete(pool: PgPool) {
    let admin_token = auth_token(&pool, "navadmin", ROLE_ADMIN).await;
    let writer_token = auth_token(&pool, "navwriter", ROLE_WRITER).await;

    let body = serde_json::json!({
        "section_key": "testimonials",
        "label_en": "Testimonials",
        "label_ar": "آراء العملاء",
        "display_order": 8
    });

    // Writers cannot manage sections.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/site-sections", body.clone(), &writer_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/site-sections", body.clone(), &admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let section_id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["section_key"], "testimonials");
    assert_eq!(json["data"]["is_visible"], true);

    // The new section shows up in the public navigation.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/site-sections").await).await;
    let sections = json["data"].as_array().unwrap();
    assert!(sections.iter().any(|s| s["section_key"] == "testimonials"));

    // Duplicate section keys are rejected.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/site-sections", body, &admin_token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/site-sections/{section_id}"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/site-sections/{section_id}"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
