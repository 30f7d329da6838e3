//! Repository for the `certifications` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::certification::{Certification, CreateCertification, UpdateCertification};
use crate::models::site_section::ReorderEntry;

const COLUMNS: &str = "id, title_en, title_ar, issuer_en, issuer_ar, issued_on, \
    credential_url, image_path, is_visible, display_order, created_at, updated_at";

/// Provides CRUD operations for certifications.
pub struct CertificationRepo;

impl CertificationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCertification,
    ) -> Result<Certification, sqlx::Error> {
        let query = format!(
            "INSERT INTO certifications (title_en, title_ar, issuer_en, issuer_ar, issued_on,
                                         credential_url, image_path, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(&input.title_en)
            .bind(input.title_ar.as_deref().unwrap_or(""))
            .bind(input.issuer_en.as_deref().unwrap_or(""))
            .bind(input.issuer_ar.as_deref().unwrap_or(""))
            .bind(input.issued_on)
            .bind(&input.credential_url)
            .bind(&input.image_path)
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Certification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM certifications WHERE id = $1");
        sqlx::query_as::<_, Certification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List certifications ordered by `display_order`, then most recently issued.
    pub async fn list(
        pool: &PgPool,
        include_hidden: bool,
    ) -> Result<Vec<Certification>, sqlx::Error> {
        let filter = if include_hidden {
            ""
        } else {
            "WHERE is_visible = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM certifications {filter}
             ORDER BY display_order ASC, issued_on DESC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Certification>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a certification. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCertification,
    ) -> Result<Option<Certification>, sqlx::Error> {
        let query = format!(
            "UPDATE certifications SET
                title_en = COALESCE($2, title_en),
                title_ar = COALESCE($3, title_ar),
                issuer_en = COALESCE($4, issuer_en),
                issuer_ar = COALESCE($5, issuer_ar),
                issued_on = COALESCE($6, issued_on),
                credential_url = COALESCE($7, credential_url),
                image_path = COALESCE($8, image_path),
                is_visible = COALESCE($9, is_visible),
                display_order = COALESCE($10, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(id)
            .bind(&input.title_en)
            .bind(&input.title_ar)
            .bind(&input.issuer_en)
            .bind(&input.issuer_ar)
            .bind(input.issued_on)
            .bind(&input.credential_url)
            .bind(&input.image_path)
            .bind(input.is_visible)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Apply a bulk reorder atomically.
    pub async fn reorder(pool: &PgPool, entries: &[ReorderEntry]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in entries {
            sqlx::query("UPDATE certifications SET display_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.display_order)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
