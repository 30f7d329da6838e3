//! Service entity model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub icon: Option<String>,
    pub is_visible: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service.
#[derive(Debug, Deserialize)]
pub struct CreateService {
    pub name_en: String,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating a service. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateService {
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub icon: Option<String>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}
