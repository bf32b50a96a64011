//! Slug Generation
//!
//! URL-safe identifiers derived from titles. Slugs are unique per
//! collection; callers resolve collisions with [`with_time_suffix`].

use std::time::{SystemTime, UNIX_EPOCH};

/// Derive a URL-safe slug from a title.
///
/// Lowercases, replaces runs of non-alphanumeric characters with a single
/// hyphen, and trims leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = false;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen && !slug.is_empty() {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Disambiguate a colliding slug with a millisecond timestamp suffix.
pub fn with_time_suffix(slug: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis();
    format!("{}-{}", slug, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("My App"), "my-app");
        assert_eq!(slugify("Hello World 2"), "hello-world-2");
    }

    #[test]
    fn test_special_characters_collapse() {
        assert_eq!(slugify("Rust & Tokio!"), "rust-tokio");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
        assert_eq!(slugify("--already--dashed--"), "already-dashed");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_time_suffix_disambiguates() {
        let a = with_time_suffix("my-app");
        assert!(a.starts_with("my-app-"));
        assert!(a.len() > "my-app-".len());
    }
}
