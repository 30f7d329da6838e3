//! Repository for the `blog_posts` table.
//!
//! Posts are soft-deleted (`is_deleted = true`) so comments and like
//! counts survive an accidental delete. Every query here filters
//! deleted rows out.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{
    BlogPost, CreateBlogPost, PostListParams, UpdateBlogPost, POST_STATUS_PUBLISHED,
};

const COLUMNS: &str = "id, title_en, title_ar, excerpt_en, excerpt_ar, content_en, content_ar, \
    slug, category_id, author_id, cover_image_path, status, is_featured, is_deleted, \
    view_count, like_count, published_at, created_at, updated_at";

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

/// Provides CRUD and publication operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new draft with a pre-resolved slug, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateBlogPost,
        slug: &str,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (title_en, title_ar, excerpt_en, excerpt_ar,
                                     content_en, content_ar, slug, category_id,
                                     author_id, cover_image_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title_en)
            .bind(input.title_ar.as_deref().unwrap_or(""))
            .bind(input.excerpt_en.as_deref().unwrap_or(""))
            .bind(input.excerpt_ar.as_deref().unwrap_or(""))
            .bind(input.content_en.as_deref().unwrap_or(""))
            .bind(input.content_ar.as_deref().unwrap_or(""))
            .bind(slug)
            .bind(input.category_id)
            .bind(author_id)
            .bind(&input.cover_image_path)
            .fetch_one(pool)
            .await
    }

    /// Find a post by internal ID, regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published post by its slug, for the public detail page.
    pub async fn find_by_slug_published(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE slug = $1 AND status = $2 AND is_deleted = false"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .bind(POST_STATUS_PUBLISHED)
            .fetch_optional(pool)
            .await
    }

    pub async fn slug_exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1)")
                .bind(slug)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    /// Bump the view counter. Fire-and-forget from the detail handler.
    pub async fn increment_view_count(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE blog_posts SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List published posts newest first, with optional category-slug and
    /// featured filters plus pagination.
    pub async fn list_published(
        pool: &PgPool,
        params: &PostListParams,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let mut filters = vec![
            "p.status = $1".to_string(),
            "p.is_deleted = false".to_string(),
        ];
        if params.category.is_some() {
            filters.push("c.slug = $2".to_string());
        }
        if params.featured_only {
            filters.push("p.is_featured = true".to_string());
        }
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        let columns = prefixed_columns("p");
        let where_clause = filters.join(" AND ");
        let (limit_param, offset_param) = if params.category.is_some() {
            ("$3", "$4")
        } else {
            ("$2", "$3")
        };
        let query = format!(
            "SELECT {columns} FROM blog_posts p
             LEFT JOIN blog_categories c ON c.id = p.category_id
             WHERE {where_clause}
             ORDER BY p.published_at DESC NULLS LAST
             LIMIT {limit_param} OFFSET {offset_param}"
        );

        let mut q = sqlx::query_as::<_, BlogPost>(&query).bind(POST_STATUS_PUBLISHED);
        if let Some(category) = &params.category {
            q = q.bind(category);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// List every non-deleted post (drafts included) newest first, for
    /// the writer dashboard. When `author_id` is set, only that author's
    /// posts are returned.
    pub async fn list_all(
        pool: &PgPool,
        author_id: Option<DbId>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE is_deleted = false AND ($1::bigint IS NULL OR author_id = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Update a post's content. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title_en = COALESCE($2, title_en),
                title_ar = COALESCE($3, title_ar),
                excerpt_en = COALESCE($4, excerpt_en),
                excerpt_ar = COALESCE($5, excerpt_ar),
                content_en = COALESCE($6, content_en),
                content_ar = COALESCE($7, content_ar),
                category_id = COALESCE($8, category_id),
                cover_image_path = COALESCE($9, cover_image_path)
             WHERE id = $1 AND is_deleted = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title_en)
            .bind(&input.title_ar)
            .bind(&input.excerpt_en)
            .bind(&input.excerpt_ar)
            .bind(&input.content_en)
            .bind(&input.content_ar)
            .bind(input.category_id)
            .bind(&input.cover_image_path)
            .fetch_optional(pool)
            .await
    }

    /// Publish a post. `published_at` is set on first publish only, so
    /// re-publishing after an unpublish keeps the original date.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                status = 'published',
                published_at = COALESCE(published_at, NOW())
             WHERE id = $1 AND is_deleted = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Revert a post to draft.
    pub async fn unpublish(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET status = 'draft'
             WHERE id = $1 AND is_deleted = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Toggle the featured flag. Returns `true` if the row was updated.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        is_featured: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blog_posts SET is_featured = $2 WHERE id = $1 AND is_deleted = false",
        )
        .bind(id)
        .bind(is_featured)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a post. Returns `true` if the row was updated.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blog_posts SET is_deleted = true WHERE id = $1 AND is_deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Prefix each column with a table alias for joined queries.
fn prefixed_columns(alias: &str) -> String {
    COLUMNS
        .split(", ")
        .map(|c| format!("{alias}.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::prefixed_columns;

    #[test]
    fn test_prefixed_columns() {
        let cols = prefixed_columns("p");
        assert!(cols.starts_with("p.id, p.title_en"));
        assert!(cols.ends_with("p.updated_at"));
        assert!(!cols.contains("p.p."));
    }
}
