//! Project and project-image models and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub slug: String,
    pub cover_image_path: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: bool,
    pub is_visible: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `project_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    pub path: String,
    pub caption_en: String,
    pub caption_ar: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. The slug is generated from `title_en`
/// when not supplied.
#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub title_en: String,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub slug: Option<String>,
    pub cover_image_path: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProject {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub cover_image_path: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for attaching an image to a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectImage {
    pub path: String,
    pub caption_en: Option<String>,
    pub caption_ar: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for editing an image's captions or position.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectImage {
    pub caption_en: Option<String>,
    pub caption_ar: Option<String>,
    pub display_order: Option<i32>,
}
