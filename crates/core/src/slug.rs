//! URL slug generation.
//!
//! Slugs are lowercase ASCII with dashes. Titles that contain no ASCII
//! alphanumerics at all (e.g. fully Arabic titles) fall back to a random
//! hex suffix so the slug is still unique and URL-safe; the Arabic title
//! itself remains the display text.

use rand::Rng;

/// Maximum slug length before truncation.
const MAX_SLUG_LEN: usize = 80;

/// Generate a slug from a title.
///
/// Lowercases, keeps ASCII alphanumerics, collapses everything else into
/// single dashes, and trims leading/trailing dashes. Returns a random
/// `entry-xxxxxxxx` slug when nothing usable remains.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true; // suppress leading dash

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        return random_slug();
    }

    slug
}

/// Append a numeric suffix for slug deduplication (`my-post-2`, `my-post-3`, ...).
pub fn numbered(base: &str, n: u32) -> String {
    format!("{base}-{n}")
}

/// Random `entry-xxxxxxxx` slug for titles with no ASCII content.
fn random_slug() -> String {
    let suffix: u32 = rand::rng().random();
    format!("entry-{suffix:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("Hello, World! (again)"), "hello-world-again");
    }

    #[test]
    fn test_leading_trailing_dashes_trimmed() {
        assert_eq!(slugify("  --Rust & Axum--  "), "rust-axum");
    }

    #[test]
    fn test_arabic_only_falls_back_to_random() {
        let slug = slugify("مرحبا بالعالم");
        assert!(slug.starts_with("entry-"), "got: {slug}");
        assert_eq!(slug.len(), "entry-".len() + 8);
    }

    #[test]
    fn test_mixed_arabic_english_keeps_english() {
        assert_eq!(slugify("مشروع Rust API"), "rust-api");
    }

    #[test]
    fn test_long_title_truncated() {
        let title = "a".repeat(200);
        assert_eq!(slugify(&title).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_numbered_suffix() {
        assert_eq!(numbered("my-post", 2), "my-post-2");
    }
}
