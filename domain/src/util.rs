//! Shared utility functions.

/// Cap a string at `max_chars` characters total, replacing the tail with
/// `...` when it does not fit. `max_chars` must be at least 3.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Take the first `max_chars` characters and append `...` if anything was
/// cut. Unlike [`ellipsize`] the marker is added on top of the prefix.
pub fn snippet(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize_total_cap() {
        let s = "a".repeat(60);
        let out = ellipsize(&s, 50);
        assert_eq!(out.chars().count(), 50);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_ellipsize_no_op_when_short() {
        assert_eq!(ellipsize("short", 50), "short");
        assert_eq!(ellipsize(&"a".repeat(50), 50), "a".repeat(50));
    }

    #[test]
    fn test_snippet_appends_marker() {
        let s = "b".repeat(60);
        let out = snippet(&s, 50);
        assert_eq!(out.chars().count(), 53);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_multibyte_safety() {
        // chars, not bytes: no panic on multi-byte boundaries
        let s = "あ".repeat(30);
        let out = ellipsize(&s, 10);
        assert_eq!(out.chars().count(), 10);
    }
}
