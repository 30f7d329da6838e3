//! Contact message model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public contact form.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactMessage {
    #[validate(length(min = 1, max = 200))]
    pub sender_name: String,
    #[validate(email)]
    pub sender_email: String,
    #[validate(length(max = 300))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

/// Query params for the admin message list.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
