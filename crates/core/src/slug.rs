//! Public event slug generation.
//!
//! An event is addressed by a URL-safe slug built from its name plus a
//! random hexadecimal suffix. The suffix provides uniqueness; the name
//! prefix keeps the URL human-readable.

use rand::Rng;

/// Maximum length of the name-derived slug prefix.
///
/// Leaves room for the `-` separator and suffix inside the 50-character
/// slug column.
pub const SLUG_BASE_MAX_LENGTH: usize = 40;

/// Length of the random hexadecimal suffix.
pub const SLUG_SUFFIX_LENGTH: usize = 8;

const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Normalize a name into a lowercase URL-safe token.
///
/// Alphanumeric characters are lowercased and kept; every other run of
/// characters collapses to a single `-`. Leading and trailing separators
/// are stripped.
///
/// # Examples
///
/// ```
/// use carpool_core::slug::slugify;
///
/// assert_eq!(slugify("Beach Trip 2026"), "beach-trip-2026");
/// assert_eq!(slugify("  Q1 -- Offsite!  "), "q1-offsite");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}

/// Generate a fresh slug for an event name.
///
/// The name-derived prefix is truncated to [`SLUG_BASE_MAX_LENGTH`] and an
/// 8-character random hex suffix is appended. Uniqueness, not secrecy, is
/// the goal: the 16^8 suffix space makes collisions negligible, and the
/// repository layer retries on the unique constraint should one occur.
pub fn generate_slug(name: &str) -> String {
    let mut base = slugify(name);
    base.truncate(SLUG_BASE_MAX_LENGTH);

    let mut rng = rand::rng();
    let suffix: String = (0..SLUG_SUFFIX_LENGTH)
        .map(|_| HEX_CHARS[rng.random_range(0..HEX_CHARS.len())] as char)
        .collect();

    if base.is_empty() {
        suffix
    } else {
        format!("{base}-{suffix}")
    }
}

/// Whether a string is usable as a slug path segment.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Beach Trip"), "beach-trip");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
    }

    #[test]
    fn slugify_strips_edges() {
        assert_eq!(slugify("  hello  "), "hello");
        assert_eq!(slugify("!hello!"), "hello");
    }

    #[test]
    fn slugify_non_ascii_becomes_separator() {
        assert_eq!(slugify("café crawl"), "caf-crawl");
    }

    #[test]
    fn slugify_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn generated_slug_is_url_safe() {
        let slug = generate_slug("Beach Trip 2026!");
        assert!(is_url_safe(&slug), "slug was {slug}");
    }

    #[test]
    fn generated_slug_has_suffix() {
        let slug = generate_slug("Beach Trip");
        assert!(slug.starts_with("beach-trip-"));
        let suffix = &slug[slug.len() - SLUG_SUFFIX_LENGTH..];
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn long_names_truncate_to_bounded_prefix() {
        let name = "x".repeat(200);
        let slug = generate_slug(&name);
        assert_eq!(slug.len(), SLUG_BASE_MAX_LENGTH + 1 + SLUG_SUFFIX_LENGTH);
    }

    #[test]
    fn nameless_events_still_get_a_slug() {
        let slug = generate_slug("!!!");
        assert_eq!(slug.len(), SLUG_SUFFIX_LENGTH);
        assert!(is_url_safe(&slug));
    }

    #[test]
    fn identical_names_get_distinct_slugs() {
        let slugs: HashSet<String> =
            (0..100).map(|_| generate_slug("Beach Trip")).collect();
        assert_eq!(slugs.len(), 100);
    }
}
