//! Text processing utilities for post and comment content.

use chrono::{DateTime, Utc};

/// Number of content characters kept in a post excerpt.
pub const EXCERPT_CHARS: usize = 150;

/// Marker appended to every generated excerpt.
pub const ELLIPSIS: &str = "...";

/// Maximum number of tags on a post.
pub const MAX_TAGS: usize = 5;

/// Content longer than this (in characters) offers a "read more" expansion.
pub const READ_MORE_THRESHOLD: usize = 300;

/// Derive a post excerpt: the first [`EXCERPT_CHARS`] characters followed by [`ELLIPSIS`].
///
/// The ellipsis is appended even when the content is shorter than the limit.
pub fn excerpt(content: &str) -> String {
    let prefix: String = content.chars().take(EXCERPT_CHARS).collect();
    format!("{}{}", prefix, ELLIPSIS)
}

/// Normalize user-entered tags.
///
/// Each tag is trimmed, empty tags are dropped, duplicates (case-sensitive) are
/// removed keeping the first occurrence, and at most [`MAX_TAGS`] survive.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::with_capacity(MAX_TAGS);
    for tag in tags {
        if out.len() == MAX_TAGS {
            break;
        }
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|existing| existing == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Long-form date used on posts, e.g. "January 15, 2024".
pub fn format_long_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Relative date used on comments: "Just now", "3h ago", or "Jan 15" after a day.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - at).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        at.format("%b %-d").to_string()
    }
}
