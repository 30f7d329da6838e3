//! Site section (navigation / home ordering) model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_sections` table.
///
/// The defaults are seeded by migration; admins may add custom sections
/// (extra landing-page blocks) on top of them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSection {
    pub id: DbId,
    pub section_key: String,
    pub label_en: String,
    pub label_ar: String,
    pub is_visible: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a site section. `section_key` must be unique.
#[derive(Debug, Deserialize)]
pub struct CreateSiteSection {
    pub section_key: String,
    pub label_en: String,
    pub label_ar: String,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating a site section. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSiteSection {
    pub label_en: Option<String>,
    pub label_ar: Option<String>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}

/// One entry of a bulk reorder request (shared by every orderable entity).
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderEntry {
    pub id: DbId,
    pub display_order: i32,
}
