//! Repository for the `social_links` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_section::ReorderEntry;
use crate::models::social_link::{CreateSocialLink, SocialLink, UpdateSocialLink};

const COLUMNS: &str =
    "id, platform, url, icon, is_visible, display_order, created_at, updated_at";

/// Provides CRUD operations for social links.
pub struct SocialLinkRepo;

impl SocialLinkRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSocialLink,
    ) -> Result<SocialLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_links (platform, url, icon, display_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SocialLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM social_links WHERE id = $1");
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List links ordered by `display_order`.
    pub async fn list(pool: &PgPool, include_hidden: bool) -> Result<Vec<SocialLink>, sqlx::Error> {
        let filter = if include_hidden {
            ""
        } else {
            "WHERE is_visible = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM social_links {filter} ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a link. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSocialLink,
    ) -> Result<Option<SocialLink>, sqlx::Error> {
        let query = format!(
            "UPDATE social_links SET
                platform = COALESCE($2, platform),
                url = COALESCE($3, url),
                icon = COALESCE($4, icon),
                is_visible = COALESCE($5, is_visible),
                display_order = COALESCE($6, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(id)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.is_visible)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Apply a bulk reorder atomically.
    pub async fn reorder(pool: &PgPool, entries: &[ReorderEntry]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in entries {
            sqlx::query("UPDATE social_links SET display_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.display_order)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM social_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
