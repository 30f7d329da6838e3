//! Repository for the `contact_messages` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_message::{ContactListParams, ContactMessage, CreateContactMessage};

const COLUMNS: &str =
    "id, sender_name, sender_email, subject, body, is_read, created_at, updated_at";

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

/// Provides operations for the contact inbox.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Store a submitted message, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (sender_name, sender_email, subject, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.sender_name)
            .bind(&input.sender_email)
            .bind(input.subject.as_deref().unwrap_or(""))
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// List messages newest first, optionally unread only, with pagination.
    pub async fn list(
        pool: &PgPool,
        params: &ContactListParams,
    ) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let filter = if params.unread_only {
            "WHERE is_read = false"
        } else {
            ""
        };
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM contact_messages {filter}
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a message read or unread. Returns `true` if the row was updated.
    pub async fn set_read(pool: &PgPool, id: DbId, is_read: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = $2 WHERE id = $1")
            .bind(id)
            .bind(is_read)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count of unread messages, for the admin dashboard badge.
    pub async fn count_unread(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contact_messages WHERE is_read = false")
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }

    /// Render the entire inbox as a CSV document, newest first.
    pub async fn export_csv(pool: &PgPool) -> Result<String, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC");
        let messages = sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await?;

        let mut out = String::from("id,sender_name,sender_email,subject,body,is_read,created_at\n");
        for m in messages {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                m.id,
                csv_escape(&m.sender_name),
                csv_escape(&m.sender_email),
                csv_escape(&m.subject),
                csv_escape(&m.body),
                m.is_read,
                m.created_at.to_rfc3339(),
            ));
        }
        Ok(out)
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::csv_escape;

    #[test]
    fn test_csv_escape_plain() {
        assert_eq!(csv_escape("hello"), "hello");
    }

    #[test]
    fn test_csv_escape_comma_and_quote() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_escape_newline() {
        assert_eq!(csv_escape("line1\nline2"), "\"line1\nline2\"");
    }
}
