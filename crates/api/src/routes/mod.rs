pub mod about;
pub mod admin;
pub mod auth;
pub mod blog;
pub mod certifications;
pub mod contact;
pub mod health;
pub mod projects;
pub mod services;
pub mod site_sections;
pub mod skills;
pub mod social_links;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                             login (public)
/// /auth/refresh                           refresh (public, cookie)
/// /auth/logout                            logout (requires auth)
/// /auth/me                                current user (requires auth)
///
/// /admin/users                            list, create (admin only)
/// /admin/users/{id}                       get, update, deactivate
/// /admin/users/{id}/reset-password        reset password
///
/// /about                                  get (public), update (admin)
///
/// /projects                               list, create
/// /projects/reorder                       reorder (admin)
/// /projects/{slug}                        public detail by slug
/// /projects/{id}                          update, delete (admin)
/// /projects/{id}/featured                 toggle featured (admin)
/// /projects/{id}/images                   list, add
/// /projects/{id}/images/{image_id}        update, delete
///
/// /services                               list, create; /reorder; /{id}
/// /skills                                 list, create; /reorder; /{id}
/// /certifications                         list, create; /reorder; /{id}
/// /social-links                           list, create; /reorder; /{id}
/// /site-sections                          list, create; /reorder; /{id}
///
/// /contact                                submit (public)
/// /contact/messages                       inbox (admin)
/// /contact/messages/unread-count          badge count (admin)
/// /contact/messages/export/csv            CSV download (admin)
/// /contact/messages/{id}                  delete (admin)
/// /contact/messages/{id}/read             mark read/unread (admin)
///
/// /blog/categories                        list (public), create (admin)
/// /blog/categories/{id}                   update, delete (admin)
/// /blog/posts                             published list (public), create draft (writer)
/// /blog/posts/manage                      dashboard list (writer/admin)
/// /blog/posts/{slug}                      public detail, bumps view count
/// /blog/posts/{id}                        update, soft delete
/// /blog/posts/{id}/publish                publish (sets published_at once)
/// /blog/posts/{id}/unpublish              back to draft
/// /blog/posts/{id}/featured               feature (admin)
/// /blog/posts/{id}/like                   toggle like (visitor key)
/// /blog/posts/{id}/comments               approved tree (public), submit (public)
/// /blog/posts/{id}/comments/all           moderation view
/// /blog/comments/pending                  moderation queue
/// /blog/comments/{id}                     soft delete
/// /blog/comments/{id}/status              approve / hide
/// /blog/comments/{id}/like                toggle like (visitor key)
///
/// /uploads                                multipart media upload (writer)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Admin user management.
        .nest("/admin", admin::router())
        // About-me singleton.
        .nest("/about", about::router())
        // Portfolio content resources.
        .nest("/projects", projects::router())
        .nest("/services", services::router())
        .nest("/skills", skills::router())
        .nest("/certifications", certifications::router())
        .nest("/social-links", social_links::router())
        .nest("/site-sections", site_sections::router())
        // Contact form + inbox.
        .nest("/contact", contact::router())
        // Blog engine: categories, posts, comments, likes.
        .nest("/blog", blog::router())
        // Media uploads.
        .nest("/uploads", uploads::router())
}
