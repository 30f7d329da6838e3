//! Social link entity model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `social_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialLink {
    pub id: DbId,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub is_visible: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a social link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSocialLink {
    #[validate(length(min = 1))]
    pub platform: String,
    #[validate(url)]
    pub url: String,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating a social link. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSocialLink {
    pub platform: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub icon: Option<String>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}
