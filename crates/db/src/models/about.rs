//! About-section (singleton profile) model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `about_section` table (always `id = 1`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutSection {
    pub id: DbId,
    pub full_name_en: String,
    pub full_name_ar: String,
    pub title_en: String,
    pub title_ar: String,
    pub bio_en: String,
    pub bio_ar: String,
    pub avatar_path: Option<String>,
    pub cv_path: Option<String>,
    pub years_experience: i32,
    pub projects_count: i32,
    pub show_skills: bool,
    pub show_projects: bool,
    pub show_services: bool,
    pub show_certifications: bool,
    pub show_blog: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `PUT /about`.
///
/// Text fields use only-overwrite-if-non-empty semantics: a missing field
/// OR an empty string leaves the stored value untouched. Numeric fields
/// and toggles apply whenever present.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAbout {
    pub full_name_en: Option<String>,
    pub full_name_ar: Option<String>,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub bio_en: Option<String>,
    pub bio_ar: Option<String>,
    pub avatar_path: Option<String>,
    pub cv_path: Option<String>,
    pub years_experience: Option<i32>,
    pub projects_count: Option<i32>,
    pub show_skills: Option<bool>,
    pub show_projects: Option<bool>,
    pub show_services: Option<bool>,
    pub show_certifications: Option<bool>,
    pub show_blog: Option<bool>,
}
