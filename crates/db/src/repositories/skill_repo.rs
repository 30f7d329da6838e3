//! Repository for the `skills` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_section::ReorderEntry;
use crate::models::skill::{CreateSkill, Skill, UpdateSkill};

const COLUMNS: &str =
    "id, name_en, name_ar, category, proficiency, is_visible, display_order, created_at, updated_at";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name_en, name_ar, category, proficiency, display_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name_en)
            .bind(input.name_ar.as_deref().unwrap_or(""))
            .bind(input.category.as_deref().unwrap_or("general"))
            .bind(input.proficiency.unwrap_or(0))
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List skills grouped by category, then by `display_order`.
    pub async fn list(pool: &PgPool, include_hidden: bool) -> Result<Vec<Skill>, sqlx::Error> {
        let filter = if include_hidden {
            ""
        } else {
            "WHERE is_visible = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM skills {filter}
             ORDER BY category ASC, display_order ASC, id ASC"
        );
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Update a skill. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar),
                category = COALESCE($4, category),
                proficiency = COALESCE($5, proficiency),
                is_visible = COALESCE($6, is_visible),
                display_order = COALESCE($7, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .bind(&input.category)
            .bind(input.proficiency)
            .bind(input.is_visible)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Apply a bulk reorder atomically.
    pub async fn reorder(pool: &PgPool, entries: &[ReorderEntry]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in entries {
            sqlx::query("UPDATE skills SET display_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.display_order)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
