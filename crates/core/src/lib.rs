//! Shared domain types for the portfolio CMS backend.
//!
//! Kept free of any HTTP or database dependency so both the `db` and `api`
//! crates can depend on it without cycles.

pub mod error;
pub mod locale;
pub mod roles;
pub mod slug;
pub mod types;
