//! Certification entity model and DTOs.

use chrono::NaiveDate;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `certifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certification {
    pub id: DbId,
    pub title_en: String,
    pub title_ar: String,
    pub issuer_en: String,
    pub issuer_ar: String,
    pub issued_on: Option<NaiveDate>,
    pub credential_url: Option<String>,
    pub image_path: Option<String>,
    pub is_visible: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a certification.
#[derive(Debug, Deserialize)]
pub struct CreateCertification {
    pub title_en: String,
    pub title_ar: Option<String>,
    pub issuer_en: Option<String>,
    pub issuer_ar: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub credential_url: Option<String>,
    pub image_path: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating a certification. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCertification {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub issuer_en: Option<String>,
    pub issuer_ar: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub credential_url: Option<String>,
    pub image_path: Option<String>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}
