//! Repository for the `projects` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::site_section::ReorderEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title_en, title_ar, description_en, description_ar, slug, \
    cover_image_path, repo_url, live_url, is_featured, is_visible, display_order, \
    created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a pre-resolved slug, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        slug: &str,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title_en, title_ar, description_en, description_ar, slug,
                                   cover_image_path, repo_url, live_url, is_featured, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title_en)
            .bind(input.title_ar.as_deref().unwrap_or(""))
            .bind(input.description_en.as_deref().unwrap_or(""))
            .bind(input.description_ar.as_deref().unwrap_or(""))
            .bind(slug)
            .bind(&input.cover_image_path)
            .bind(&input.repo_url)
            .bind(&input.live_url)
            .bind(input.is_featured.unwrap_or(false))
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find a project by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a slug is already taken.
    pub async fn slug_exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM projects WHERE slug = $1)")
                .bind(slug)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// List projects ordered by `display_order`, then newest first.
    ///
    /// Hidden projects are only included when `include_hidden` is set.
    pub async fn list(pool: &PgPool, include_hidden: bool) -> Result<Vec<Project>, sqlx::Error> {
        let filter = if include_hidden {
            ""
        } else {
            "WHERE is_visible = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM projects {filter}
             ORDER BY display_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title_en = COALESCE($2, title_en),
                title_ar = COALESCE($3, title_ar),
                description_en = COALESCE($4, description_en),
                description_ar = COALESCE($5, description_ar),
                cover_image_path = COALESCE($6, cover_image_path),
                repo_url = COALESCE($7, repo_url),
                live_url = COALESCE($8, live_url),
                is_featured = COALESCE($9, is_featured),
                is_visible = COALESCE($10, is_visible),
                display_order = COALESCE($11, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title_en)
            .bind(&input.title_ar)
            .bind(&input.description_en)
            .bind(&input.description_ar)
            .bind(&input.cover_image_path)
            .bind(&input.repo_url)
            .bind(&input.live_url)
            .bind(input.is_featured)
            .bind(input.is_visible)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Toggle the featured flag. Returns `true` if the row was updated.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        is_featured: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET is_featured = $2 WHERE id = $1")
            .bind(id)
            .bind(is_featured)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a bulk reorder atomically. Unknown IDs are ignored.
    pub async fn reorder(pool: &PgPool, entries: &[ReorderEntry]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in entries {
            sqlx::query("UPDATE projects SET display_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.display_order)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    /// Delete a project (cascades to its images). Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
