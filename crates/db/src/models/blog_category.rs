//! Blog category model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `blog_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogCategory {
    pub id: DbId,
    pub name_en: String,
    pub name_ar: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category. Slug is generated from `name_en` when absent.
#[derive(Debug, Deserialize)]
pub struct CreateBlogCategory {
    pub name_en: String,
    pub name_ar: Option<String>,
    pub slug: Option<String>,
}

/// DTO for updating a category. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogCategory {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
}
