//! Repository for the `site_sections` table.
//!
//! The default sections are seeded by migration; admins can add custom
//! ones, so create and delete live here alongside label/visibility edits.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_section::{CreateSiteSection, ReorderEntry, SiteSection, UpdateSiteSection};

const COLUMNS: &str =
    "id, section_key, label_en, label_ar, is_visible, display_order, created_at, updated_at";

pub struct SiteSectionRepo;

impl SiteSectionRepo {
    /// List sections ordered by `display_order`.
    pub async fn list(pool: &PgPool, include_hidden: bool) -> Result<Vec<SiteSection>, sqlx::Error> {
        let filter = if include_hidden {
            ""
        } else {
            "WHERE is_visible = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM site_sections {filter} ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, SiteSection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new section. The `uq_site_sections_key` constraint rejects
    /// duplicate keys.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSiteSection,
    ) -> Result<SiteSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_sections (section_key, label_en, label_ar, is_visible, display_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSection>(&query)
            .bind(&input.section_key)
            .bind(&input.label_en)
            .bind(&input.label_ar)
            .bind(input.is_visible.unwrap_or(true))
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Update a section's labels, visibility, or position.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSiteSection,
    ) -> Result<Option<SiteSection>, sqlx::Error> {
        let query = format!(
            "UPDATE site_sections SET
                label_en = COALESCE($2, label_en),
                label_ar = COALESCE($3, label_ar),
                is_visible = COALESCE($4, is_visible),
                display_order = COALESCE($5, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSection>(&query)
            .bind(id)
            .bind(&input.label_en)
            .bind(&input.label_ar)
            .bind(input.is_visible)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a section. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a bulk reorder atomically.
    pub async fn reorder(pool: &PgPool, entries: &[ReorderEntry]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in entries {
            sqlx::query("UPDATE site_sections SET display_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.display_order)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }
}
