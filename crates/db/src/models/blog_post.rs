//! Blog post model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Post status: drafts are only visible to authenticated writers.
pub const POST_STATUS_DRAFT: &str = "draft";
pub const POST_STATUS_PUBLISHED: &str = "published";

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title_en: String,
    pub title_ar: String,
    pub excerpt_en: String,
    pub excerpt_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub slug: String,
    pub category_id: Option<DbId>,
    pub author_id: DbId,
    pub cover_image_path: Option<String>,
    /// `"draft"` or `"published"`.
    pub status: String,
    pub is_featured: bool,
    pub is_deleted: bool,
    pub view_count: i32,
    pub like_count: i32,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a post (always starts as a draft).
#[derive(Debug, Deserialize)]
pub struct CreateBlogPost {
    pub title_en: String,
    pub title_ar: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<DbId>,
    pub cover_image_path: Option<String>,
}

/// DTO for updating a post. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogPost {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub category_id: Option<DbId>,
    pub cover_image_path: Option<String>,
}

/// Query params for the public post list.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    /// Filter by category slug.
    pub category: Option<String>,
    #[serde(default)]
    pub featured_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
