//! Integration tests for the blog publication and engagement flows.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Posts start as drafts and only appear publicly after publish
//! - `published_at` survives an unpublish/republish cycle
//! - Like toggles are idempotent pairs and keep counters in sync
//! - Comments land pending and only approved ones reach the public list
//! - Soft-deleting a post hides it everywhere

use portfolio_db::models::blog_category::CreateBlogCategory;
use portfolio_db::models::blog_comment::{CreateBlogComment, COMMENT_STATUS_APPROVED};
use portfolio_db::models::blog_post::{CreateBlogPost, PostListParams, POST_STATUS_DRAFT};
use portfolio_db::models::user::CreateUser;
use portfolio_db::repositories::{
    BlogCategoryRepo, BlogCommentRepo, BlogPostRepo, LikeRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_author(pool: &PgPool) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "writer1".to_string(),
            email: "writer1@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: "writer".to_string(),
        },
    )
    .await
    .unwrap();
    user.id
}

fn new_post(title: &str) -> CreateBlogPost {
    CreateBlogPost {
        title_en: title.to_string(),
        title_ar: Some("تدوينة".to_string()),
        excerpt_en: None,
        excerpt_ar: None,
        content_en: Some("body".to_string()),
        content_ar: None,
        slug: None,
        category_id: None,
        cover_image_path: None,
    }
}

fn new_comment(name: &str) -> CreateBlogComment {
    CreateBlogComment {
        parent_id: None,
        author_name: name.to_string(),
        author_email: format!("{name}@example.com"),
        body: "nice post".to_string(),
    }
}

fn default_list_params() -> PostListParams {
    PostListParams {
        category: None,
        featured_only: false,
        limit: None,
        offset: None,
    }
}

// ---------------------------------------------------------------------------
// Test: posts start as drafts and are invisible publicly
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_new_post_is_draft_and_hidden_from_public(pool: PgPool) {
    let author_id = seed_author(&pool).await;
    let post = BlogPostRepo::create(&pool, author_id, &new_post("Draft Post"), "draft-post")
        .await
        .unwrap();
    assert_eq!(post.status, POST_STATUS_DRAFT);
    assert!(post.published_at.is_none());

    let public = BlogPostRepo::list_published(&pool, &default_list_params())
        .await
        .unwrap();
    assert!(!public.iter().any(|p| p.id == post.id));

    let by_slug = BlogPostRepo::find_by_slug_published(&pool, "draft-post")
        .await
        .unwrap();
    assert!(by_slug.is_none(), "drafts must not resolve publicly");
}

// ---------------------------------------------------------------------------
// Test: publish sets published_at once; republish keeps it
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_publish_sets_published_at_once(pool: PgPool) {
    let author_id = seed_author(&pool).await;
    let post = BlogPostRepo::create(&pool, author_id, &new_post("Publish Me"), "publish-me")
        .await
        .unwrap();

    let published = BlogPostRepo::publish(&pool, post.id).await.unwrap().unwrap();
    let first_published_at = published.published_at.expect("publish should set timestamp");

    BlogPostRepo::unpublish(&pool, post.id).await.unwrap();
    let republished = BlogPostRepo::publish(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(
        republished.published_at,
        Some(first_published_at),
        "republish must not move the original publication date"
    );

    let by_slug = BlogPostRepo::find_by_slug_published(&pool, "publish-me")
        .await
        .unwrap();
    assert!(by_slug.is_some());
}

// ---------------------------------------------------------------------------
// Test: category filter on the public list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_published_filters_by_category_slug(pool: PgPool) {
    let author_id = seed_author(&pool).await;
    let category = BlogCategoryRepo::create(
        &pool,
        &CreateBlogCategory {
            name_en: "Rust".to_string(),
            name_ar: None,
            slug: None,
        },
        "rust",
    )
    .await
    .unwrap();

    let mut in_category = new_post("In Category");
    in_category.category_id = Some(category.id);
    let tagged = BlogPostRepo::create(&pool, author_id, &in_category, "in-category")
        .await
        .unwrap();
    let untagged = BlogPostRepo::create(&pool, author_id, &new_post("No Category"), "no-category")
        .await
        .unwrap();
    BlogPostRepo::publish(&pool, tagged.id).await.unwrap();
    BlogPostRepo::publish(&pool, untagged.id).await.unwrap();

    let params = PostListParams {
        category: Some("rust".to_string()),
        ..default_list_params()
    };
    let filtered = BlogPostRepo::list_published(&pool, &params).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, tagged.id);
}

// ---------------------------------------------------------------------------
// Test: like toggle pairs return the counter to its start
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_post_like_toggle_roundtrip(pool: PgPool) {
    let author_id = seed_author(&pool).await;
    let post = BlogPostRepo::create(&pool, author_id, &new_post("Likeable"), "likeable")
        .await
        .unwrap();

    let (liked, count) = LikeRepo::toggle_post_like(&pool, post.id, "visitor-a")
        .await
        .unwrap();
    assert!(liked);
    assert_eq!(count, 1);

    // A second visitor is independent.
    let (_, count) = LikeRepo::toggle_post_like(&pool, post.id, "visitor-b")
        .await
        .unwrap();
    assert_eq!(count, 2);

    // Same visitor toggling again removes their like.
    let (liked, count) = LikeRepo::toggle_post_like(&pool, post.id, "visitor-a")
        .await
        .unwrap();
    assert!(!liked);
    assert_eq!(count, 1);

    let reloaded = BlogPostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(reloaded.like_count, 1, "stored counter must match");
}

// ---------------------------------------------------------------------------
// Test: comment moderation gates the public list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_comments_require_approval(pool: PgPool) {
    let author_id = seed_author(&pool).await;
    let post = BlogPostRepo::create(&pool, author_id, &new_post("Discussed"), "discussed")
        .await
        .unwrap();
    BlogPostRepo::publish(&pool, post.id).await.unwrap();

    let comment = BlogCommentRepo::create(&pool, post.id, None, &new_comment("zainab"))
        .await
        .unwrap();
    assert_eq!(comment.status, "pending");

    let public = BlogCommentRepo::list_approved_for_post(&pool, post.id)
        .await
        .unwrap();
    assert!(public.is_empty(), "pending comments stay out of the public list");

    BlogCommentRepo::set_status(&pool, comment.id, COMMENT_STATUS_APPROVED)
        .await
        .unwrap();
    let public = BlogCommentRepo::list_approved_for_post(&pool, post.id)
        .await
        .unwrap();
    assert_eq!(public.len(), 1);

    // Moderation view sees everything either way.
    let all = BlogCommentRepo::list_for_post_all(&pool, post.id).await.unwrap();
    assert_eq!(all.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: comment like toggle updates the comment counter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_comment_like_toggle(pool: PgPool) {
    let author_id = seed_author(&pool).await;
    let post = BlogPostRepo::create(&pool, author_id, &new_post("Thread"), "thread")
        .await
        .unwrap();
    let comment = BlogCommentRepo::create(&pool, post.id, None, &new_comment("omar"))
        .await
        .unwrap();

    let (liked, count) = LikeRepo::toggle_comment_like(&pool, comment.id, "visitor-a")
        .await
        .unwrap();
    assert!(liked);
    assert_eq!(count, 1);

    let (liked, count) = LikeRepo::toggle_comment_like(&pool, comment.id, "visitor-a")
        .await
        .unwrap();
    assert!(!liked);
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Test: soft delete hides a post from every read path
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_hides_post_everywhere(pool: PgPool) {
    let author_id = seed_author(&pool).await;
    let post = BlogPostRepo::create(&pool, author_id, &new_post("Doomed"), "doomed")
        .await
        .unwrap();
    BlogPostRepo::publish(&pool, post.id).await.unwrap();

    let deleted = BlogPostRepo::soft_delete(&pool, post.id).await.unwrap();
    assert!(deleted, "first soft_delete should return true");
    let again = BlogPostRepo::soft_delete(&pool, post.id).await.unwrap();
    assert!(!again, "second soft_delete should return false");

    assert!(BlogPostRepo::find_by_id(&pool, post.id).await.unwrap().is_none());
    assert!(BlogPostRepo::find_by_slug_published(&pool, "doomed")
        .await
        .unwrap()
        .is_none());
    let all = BlogPostRepo::list_all(&pool, None).await.unwrap();
    assert!(!all.iter().any(|p| p.id == post.id));
}
