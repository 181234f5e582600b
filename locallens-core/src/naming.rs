//! Stored-name generation for uploaded photos.
//!
//! A stored name is `<unix-millis>-<token>-<sanitized original name>`. The
//! millisecond prefix keeps directory listings in upload order; the random
//! token separates uploads that land in the same millisecond with the same
//! original name.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Length of the random token inserted between the timestamp and the name.
const TOKEN_LEN: usize = 12;

/// Longest sanitized original name kept in a stored name. Keeps the whole
/// stored name below the usual 255-byte filesystem limit.
const MAX_NAME_LEN: usize = 200;

/// Used when nothing of the original name survives sanitizing.
const FALLBACK_NAME: &str = "upload";

/// Generate a fresh stored name for an upload received at `at`.
///
/// Every call draws a new random token, so two calls with identical inputs
/// return different names.
pub fn stored_name(at: DateTime<Utc>, original_name: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        at.timestamp_millis(),
        &token[..TOKEN_LEN],
        sanitize_file_name(original_name)
    )
}

/// Reduce a client-supplied file name to something safe to use both as a
/// file name and as a URL path segment.
///
/// Only the last path component is kept, characters outside `[A-Za-z0-9._-]`
/// become `_` and leading dots are dropped.
pub fn sanitize_file_name(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let mut cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // Keep the tail so the extension survives truncation
    if cleaned.len() > MAX_NAME_LEN {
        cleaned = cleaned[cleaned.len() - MAX_NAME_LEN..].to_string();
    }

    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stored_name_layout() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let name = stored_name(at, "sign.jpg");

        let mut parts = name.splitn(3, '-');
        assert_eq!(parts.next(), Some("1700000000123"));
        let token = parts.next().unwrap();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(parts.next(), Some("sign.jpg"));
    }

    #[test]
    fn test_same_instant_same_name_still_distinct() {
        let at = Utc::now();
        let a = stored_name(at, "sign.jpg");
        let b = stored_name(at, "sign.jpg");
        assert_ne!(a, b);
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\menu.png"), "menu.png");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_file_name("<script>.png"), "_script_.png");
        assert_eq!(sanitize_file_name("fleur-été.jpg"), "fleur-_t_.jpg");
    }

    #[test]
    fn test_sanitize_fallbacks() {
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name(".."), "upload");
        assert_eq!(sanitize_file_name("dir/"), "upload");
        assert_eq!(sanitize_file_name(".hidden.jpg"), "hidden.jpg");
    }

    #[test]
    fn test_sanitize_truncates_keeping_extension() {
        let long = format!("{}.jpg", "a".repeat(500));
        let cleaned = sanitize_file_name(&long);
        assert_eq!(cleaned.len(), MAX_NAME_LEN);
        assert!(cleaned.ends_with(".jpg"));
    }
}
