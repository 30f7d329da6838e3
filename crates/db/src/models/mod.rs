//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod about;
pub mod blog_category;
pub mod blog_comment;
pub mod blog_post;
pub mod certification;
pub mod contact_message;
pub mod project;
pub mod service;
pub mod session;
pub mod site_section;
pub mod skill;
pub mod social_link;
pub mod user;
