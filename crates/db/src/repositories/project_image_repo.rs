//! Repository for the `project_images` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProjectImage, ProjectImage, UpdateProjectImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, path, caption_en, caption_ar, display_order, created_at, updated_at";

/// Provides CRUD operations for project gallery images.
pub struct ProjectImageRepo;

impl ProjectImageRepo {
    /// Attach an image to a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectImage,
    ) -> Result<ProjectImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_images (project_id, path, caption_en, caption_ar, display_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .bind(&input.path)
            .bind(input.caption_en.as_deref().unwrap_or(""))
            .bind(input.caption_ar.as_deref().unwrap_or(""))
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find an image by ID, scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_images WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's images ordered by `display_order`.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_images
             WHERE project_id = $1
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update an image's captions or position. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateProjectImage,
    ) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!(
            "UPDATE project_images SET
                caption_en = COALESCE($3, caption_en),
                caption_ar = COALESCE($4, caption_ar),
                display_order = COALESCE($5, display_order)
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.caption_en)
            .bind(&input.caption_ar)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Detach an image. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_images WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
