//! Repository for the `blog_categories` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_category::{BlogCategory, CreateBlogCategory, UpdateBlogCategory};

const COLUMNS: &str = "id, name_en, name_ar, slug, created_at, updated_at";

/// Provides CRUD operations for blog categories.
pub struct BlogCategoryRepo;

impl BlogCategoryRepo {
    /// Insert a new category with a pre-resolved slug.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBlogCategory,
        slug: &str,
    ) -> Result<BlogCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_categories (name_en, name_ar, slug)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogCategory>(&query)
            .bind(&input.name_en)
            .bind(input.name_ar.as_deref().unwrap_or(""))
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    pub async fn slug_exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM blog_categories WHERE slug = $1)")
                .bind(slug)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// List all categories alphabetically by English name.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_categories ORDER BY name_en ASC");
        sqlx::query_as::<_, BlogCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a category's names. The slug is immutable once created so
    /// published post URLs stay stable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogCategory,
    ) -> Result<Option<BlogCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_categories SET
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogCategory>(&query)
            .bind(id)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Posts in it fall back to uncategorized
    /// (`category_id` is set NULL by the FK).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
