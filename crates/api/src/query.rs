//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_hidden` flag.
///
/// Public callers always get the visible subset; the flag is only honoured
/// for authenticated users (checked in the handler).
#[derive(Debug, Deserialize)]
pub struct IncludeHiddenParams {
    #[serde(default)]
    pub include_hidden: bool,
}
