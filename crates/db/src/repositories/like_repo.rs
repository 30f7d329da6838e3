//! Repository for post and comment likes.
//!
//! Likes are keyed by `visitor_key` (an opaque client identity, or
//! `user:{id}` for authenticated callers). Toggling twice returns the
//! counter to where it started. The insert/delete and the counter bump
//! run in one transaction so `like_count` never drifts from the rows.

use portfolio_core::types::DbId;
use sqlx::PgPool;

pub struct LikeRepo;

impl LikeRepo {
    /// Toggle a like on a post. Returns `(liked, like_count)` after the
    /// toggle.
    pub async fn toggle_post_like(
        pool: &PgPool,
        post_id: DbId,
        visitor_key: &str,
    ) -> Result<(bool, i32), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO post_likes (post_id, visitor_key)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_post_likes_pair DO NOTHING",
        )
        .bind(post_id)
        .bind(visitor_key)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        let liked = if inserted {
            true
        } else {
            sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND visitor_key = $2")
                .bind(post_id)
                .bind(visitor_key)
                .execute(&mut *tx)
                .await?;
            false
        };

        let delta = if liked { 1 } else { -1 };
        let count: (i32,) = sqlx::query_as(
            "UPDATE blog_posts
             SET like_count = GREATEST(like_count + $2, 0)
             WHERE id = $1
             RETURNING like_count",
        )
        .bind(post_id)
        .bind(delta)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((liked, count.0))
    }

    /// Toggle a like on a comment. Returns `(liked, like_count)` after
    /// the toggle.
    pub async fn toggle_comment_like(
        pool: &PgPool,
        comment_id: DbId,
        visitor_key: &str,
    ) -> Result<(bool, i32), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO comment_likes (comment_id, visitor_key)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_comment_likes_pair DO NOTHING",
        )
        .bind(comment_id)
        .bind(visitor_key)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        let liked = if inserted {
            true
        } else {
            sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND visitor_key = $2")
                .bind(comment_id)
                .bind(visitor_key)
                .execute(&mut *tx)
                .await?;
            false
        };

        let delta = if liked { 1 } else { -1 };
        let count: (i32,) = sqlx::query_as(
            "UPDATE blog_comments
             SET like_count = GREATEST(like_count + $2, 0)
             WHERE id = $1
             RETURNING like_count",
        )
        .bind(comment_id)
        .bind(delta)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((liked, count.0))
    }
}
