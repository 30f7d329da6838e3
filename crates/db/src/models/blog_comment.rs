//! Blog comment model, DTOs, and reply-tree assembly.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Comment moderation states.
pub const COMMENT_STATUS_PENDING: &str = "pending";
pub const COMMENT_STATUS_APPROVED: &str = "approved";
pub const COMMENT_STATUS_HIDDEN: &str = "hidden";

/// A row from the `blog_comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogComment {
    pub id: DbId,
    pub post_id: DbId,
    pub parent_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub author_name: String,
    pub author_email: String,
    pub body: String,
    /// `"pending"`, `"approved"`, or `"hidden"`.
    pub status: String,
    pub is_deleted: bool,
    pub like_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a comment (public form; lands as `pending`).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogComment {
    pub parent_id: Option<DbId>,
    #[validate(length(min = 1, max = 100))]
    pub author_name: String,
    #[validate(email)]
    pub author_email: String,
    #[validate(length(min = 1, max = 5000))]
    pub body: String,
}

/// An approved comment with its nested replies, for the public tree.
#[derive(Debug, Serialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: BlogComment,
    pub replies: Vec<CommentNode>,
}

/// Assemble a flat, chronologically ordered comment list into a reply tree.
///
/// Comments whose parent is absent from the input (e.g. the parent is
/// still pending or was hidden) are promoted to top level rather than
/// silently dropped, so approved replies never disappear from the page.
pub fn build_tree(comments: Vec<BlogComment>) -> Vec<CommentNode> {
    use std::collections::HashMap;

    let ids: std::collections::HashSet<DbId> = comments.iter().map(|c| c.id).collect();

    let mut children: HashMap<DbId, Vec<BlogComment>> = HashMap::new();
    let mut roots: Vec<BlogComment> = Vec::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent) if ids.contains(&parent) => {
                children.entry(parent).or_default().push(comment);
            }
            _ => roots.push(comment),
        }
    }

    fn attach(
        comment: BlogComment,
        children: &mut std::collections::HashMap<DbId, Vec<BlogComment>>,
    ) -> CommentNode {
        let replies = children
            .remove(&comment.id)
            .unwrap_or_default()
            .into_iter()
            .map(|c| attach(c, children))
            .collect();
        CommentNode { comment, replies }
    }

    roots
        .into_iter()
        .map(|c| attach(c, &mut children))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn comment(id: DbId, parent_id: Option<DbId>) -> BlogComment {
        BlogComment {
            id,
            post_id: 1,
            parent_id,
            user_id: None,
            author_name: format!("visitor-{id}"),
            author_email: String::new(),
            body: "hi".to_string(),
            status: COMMENT_STATUS_APPROVED.to_string(),
            is_deleted: false,
            like_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_flat_list_stays_flat() {
        let tree = build_tree(vec![comment(1, None), comment(2, None)]);
        assert_eq!(tree.len(), 2);
        assert!(tree[0].replies.is_empty());
    }

    #[test]
    fn test_replies_nest_under_parent() {
        let tree = build_tree(vec![comment(1, None), comment(2, Some(1)), comment(3, Some(2))]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].replies.len(), 1);
        assert_eq!(tree[0].replies[0].comment.id, 2);
        assert_eq!(tree[0].replies[0].replies[0].comment.id, 3);
    }

    #[test]
    fn test_orphan_reply_promoted_to_root() {
        // Parent 5 is not in the list (e.g. hidden by moderation).
        let tree = build_tree(vec![comment(1, None), comment(2, Some(5))]);
        assert_eq!(tree.len(), 2);
    }
}
