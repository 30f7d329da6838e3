//! Repository for the `blog_comments` table.
//!
//! Comments land as `pending` and only appear publicly once approved.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_comment::{
    BlogComment, CreateBlogComment, COMMENT_STATUS_APPROVED,
};

const COLUMNS: &str = "id, post_id, parent_id, user_id, author_name, author_email, body, \
    status, is_deleted, like_count, created_at, updated_at";

pub struct BlogCommentRepo;

impl BlogCommentRepo {
    /// Insert a new pending comment, returning the created row.
    ///
    /// `user_id` is set when the comment came from an authenticated
    /// account, which moderation can use to trust known authors.
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        user_id: Option<DbId>,
        input: &CreateBlogComment,
    ) -> Result<BlogComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_comments (post_id, parent_id, user_id, author_name, author_email, body)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogComment>(&query)
            .bind(post_id)
            .bind(input.parent_id)
            .bind(user_id)
            .bind(&input.author_name)
            .bind(&input.author_email)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogComment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_comments WHERE id = $1 AND is_deleted = false");
        sqlx::query_as::<_, BlogComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Approved comments for a post, oldest first (tree assembly relies
    /// on parents sorting before their replies).
    pub async fn list_approved_for_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<BlogComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_comments
             WHERE post_id = $1 AND status = $2 AND is_deleted = false
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, BlogComment>(&query)
            .bind(post_id)
            .bind(COMMENT_STATUS_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// Every non-deleted comment on a post regardless of status, for the
    /// moderation view.
    pub async fn list_for_post_all(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<BlogComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_comments
             WHERE post_id = $1 AND is_deleted = false
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, BlogComment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Pending comments across all posts, oldest first, for the
    /// moderation queue.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<BlogComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_comments
             WHERE status = 'pending' AND is_deleted = false
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, BlogComment>(&query).fetch_all(pool).await
    }

    /// Move a comment to a new moderation status.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<BlogComment>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_comments SET status = $2
             WHERE id = $1 AND is_deleted = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogComment>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a comment. Replies stay attached and are promoted to
    /// top level in the public tree.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blog_comments SET is_deleted = true WHERE id = $1 AND is_deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
