//! HTTP handlers, one module per resource.

pub mod about;
pub mod admin;
pub mod auth;
pub mod blog;
pub mod certifications;
pub mod comments;
pub mod contact;
pub mod projects;
pub mod services;
pub mod site_sections;
pub mod skills;
pub mod social_links;
pub mod uploads;

use portfolio_core::slug::{numbered, slugify};

use crate::error::{AppError, AppResult};

/// Resolve a unique slug for a new row.
///
/// Uses the explicit slug when given, otherwise slugifies the English
/// title. Collisions (checked via the `exists` callback) get a numeric
/// suffix: `my-post`, `my-post-2`, `my-post-3`, ...
pub(crate) async fn unique_slug<F, Fut>(
    explicit: Option<&str>,
    title_en: &str,
    exists: F,
) -> AppResult<String>
where
    F: Fn(String) -> Fut,
    Fut: std::future::Future<Output = Result<bool, sqlx::Error>>,
{
    let base = match explicit {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => slugify(title_en),
    };

    if !exists(base.clone()).await? {
        return Ok(base);
    }
    for n in 2..100 {
        let candidate = numbered(&base, n);
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
    }
    Err(AppError::InternalError(format!(
        "Could not find a free slug for '{base}'"
    )))
}
