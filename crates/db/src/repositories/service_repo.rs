//! Repository for the `services` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};
use crate::models::site_section::ReorderEntry;

const COLUMNS: &str = "id, name_en, name_ar, description_en, description_ar, icon, \
    is_visible, display_order, created_at, updated_at";

/// Provides CRUD operations for offered services.
pub struct ServiceRepo;

impl ServiceRepo {
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (name_en, name_ar, description_en, description_ar, icon, display_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.name_en)
            .bind(input.name_ar.as_deref().unwrap_or(""))
            .bind(input.description_en.as_deref().unwrap_or(""))
            .bind(input.description_ar.as_deref().unwrap_or(""))
            .bind(&input.icon)
            .bind(input.display_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List services ordered by `display_order`.
    pub async fn list(pool: &PgPool, include_hidden: bool) -> Result<Vec<Service>, sqlx::Error> {
        let filter = if include_hidden {
            ""
        } else {
            "WHERE is_visible = true"
        };
        let query =
            format!("SELECT {COLUMNS} FROM services {filter} ORDER BY display_order ASC, id ASC");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Update a service. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar),
                description_en = COALESCE($4, description_en),
                description_ar = COALESCE($5, description_ar),
                icon = COALESCE($6, icon),
                is_visible = COALESCE($7, is_visible),
                display_order = COALESCE($8, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.name_en)
            .bind(&input.name_ar)
            .bind(&input.description_en)
            .bind(&input.description_ar)
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
            sqlx::query("UPDATE services SET display_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.display_order)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
