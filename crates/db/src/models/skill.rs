//! Skill entity model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name_en: String,
    pub name_ar: String,
    pub category: String,
    /// 0..=100, enforced by both the DTO validator and a CHECK constraint.
    pub proficiency: i32,
    pub is_visible: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(length(min = 1))]
    pub name_en: String,
    pub name_ar: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub proficiency: Option<i32>,
    pub display_order: Option<i32>,
}

/// DTO for updating a skill. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSkill {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub proficiency: Option<i32>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}
