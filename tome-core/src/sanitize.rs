//! Input sanitization for user-submitted text fields

/// Trim, truncate, and escape a user-supplied string
///
/// Leading and trailing whitespace is trimmed, the result is truncated to at
/// most `max_length` characters, and every `<` / `>` is replaced with its
/// HTML entity. Truncation happens before escaping, so the entities may push
/// the final character count past `max_length`. No other characters change.
pub fn sanitize(input: &str, max_length: usize) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len().min(max_length));
    for c in trimmed.chars().take(max_length) {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_truncate_then_escape() {
        assert_eq!(sanitize("  <script>  ", 7), "&lt;script");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("The Hobbit", 50), "The Hobbit");
    }

    #[test]
    fn test_escapes_both_brackets() {
        assert_eq!(sanitize("<b>bold</b>", 20), "&lt;b&gt;bold&lt;/b&gt;");
    }

    #[test]
    fn test_zero_max_length_yields_empty() {
        assert_eq!(sanitize("anything", 0), "");
        assert_eq!(sanitize("   ", 0), "");
    }

    #[test]
    fn test_truncates_characters_not_bytes() {
        assert_eq!(sanitize("héllo", 2), "hé");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        assert_eq!(sanitize("  a  b  ", 10), "a  b");
    }
}
