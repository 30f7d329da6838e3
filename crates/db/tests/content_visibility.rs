//! Integration tests for content visibility, ordering, and the about
//! singleton's non-empty-overwrite update rule.

use portfolio_db::models::about::UpdateAbout;
use portfolio_db::models::contact_message::{ContactListParams, CreateContactMessage};
use portfolio_db::models::project::{CreateProject, UpdateProject};
use portfolio_db::models::site_section::ReorderEntry;
use portfolio_db::repositories::{AboutRepo, ContactMessageRepo, ProjectRepo, SiteSectionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title_en: title.to_string(),
        title_ar: None,
        description_en: None,
        description_ar: None,
        slug: None,
        cover_image_path: None,
        repo_url: None,
        live_url: None,
        is_featured: None,
        display_order: None,
    }
}

// ---------------------------------------------------------------------------
// Test: hidden projects only show with include_hidden
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_hidden_projects_excluded_from_public_list(pool: PgPool) {
    let visible = ProjectRepo::create(&pool, &new_project("Visible"), "visible")
        .await
        .unwrap();
    let hidden = ProjectRepo::create(&pool, &new_project("Hidden"), "hidden")
        .await
        .unwrap();
    ProjectRepo::update(
        &pool,
        hidden.id,
        &UpdateProject {
            is_visible: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let public = ProjectRepo::list(&pool, false).await.unwrap();
    assert!(public.iter().any(|p| p.id == visible.id));
    assert!(!public.iter().any(|p| p.id == hidden.id));

    let admin = ProjectRepo::list(&pool, true).await.unwrap();
    assert!(admin.iter().any(|p| p.id == hidden.id));
}

// ---------------------------------------------------------------------------
// Test: reorder is applied atomically and reflected in list order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_project_reorder(pool: PgPool) {
    let first = ProjectRepo::create(&pool, &new_project("First"), "first")
        .await
        .unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Second"), "second")
        .await
        .unwrap();

    ProjectRepo::reorder(
        &pool,
        &[
            ReorderEntry {
                id: first.id,
                display_order: 2,
            },
            ReorderEntry {
                id: second.id,
                display_order: 1,
            },
        ],
    )
    .await
    .unwrap();

    let listed = ProjectRepo::list(&pool, true).await.unwrap();
    let positions: Vec<i64> = listed.iter().map(|p| p.id).collect();
    assert!(
        positions.iter().position(|&id| id == second.id)
            < positions.iter().position(|&id| id == first.id),
        "second should now sort before first"
    );
}

// ---------------------------------------------------------------------------
// Test: the about row exists from migration and ignores empty strings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_about_update_ignores_empty_strings(pool: PgPool) {
    let seeded = AboutRepo::get(&pool).await.unwrap();
    assert_eq!(seeded.id, 1);

    let updated = AboutRepo::update(
        &pool,
        &UpdateAbout {
            full_name_en: Some("Jane Doe".to_string()),
            years_experience: Some(7),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.full_name_en, "Jane Doe");
    assert_eq!(updated.years_experience, 7);

    // Empty string must not wipe the stored name.
    let updated = AboutRepo::update(
        &pool,
        &UpdateAbout {
            full_name_en: Some(String::new()),
            bio_ar: Some("نبذة".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.full_name_en, "Jane Doe");
    assert_eq!(updated.bio_ar, "نبذة");
}

// ---------------------------------------------------------------------------
// Test: site sections are seeded and reorderable
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_site_sections_seeded(pool: PgPool) {
    let sections = SiteSectionRepo::list(&pool, true).await.unwrap();
    assert!(
        sections.iter().any(|s| s.section_key == "about"),
        "migration should seed the about section"
    );
    assert!(sections.iter().any(|s| s.section_key == "blog"));
}

// ---------------------------------------------------------------------------
// Test: contact inbox filtering, unread count, and CSV export
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_contact_inbox_flow(pool: PgPool) {
    let message = ContactMessageRepo::create(
        &pool,
        &CreateContactMessage {
            sender_name: "Sam, the \"client\"".to_string(),
            sender_email: "sam@example.com".to_string(),
            subject: Some("Project enquiry".to_string()),
            body: "Hello\nCan you help?".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(!message.is_read);
    assert_eq!(ContactMessageRepo::count_unread(&pool).await.unwrap(), 1);

    ContactMessageRepo::set_read(&pool, message.id, true)
        .await
        .unwrap();
    assert_eq!(ContactMessageRepo::count_unread(&pool).await.unwrap(), 0);

    let unread = ContactMessageRepo::list(
        &pool,
        &ContactListParams {
            unread_only: true,
            limit: None,
            offset: None,
        },
    )
    .await
    .unwrap();
    assert!(unread.is_empty());

    let csv = ContactMessageRepo::export_csv(&pool).await.unwrap();
    assert!(csv.starts_with("id,sender_name"));
    assert!(
        csv.contains("\"Sam, the \"\"client\"\"\""),
        "names with commas and quotes must be escaped"
    );
}
