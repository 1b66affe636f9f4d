//! Text normalization.

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\- ]+").ok());

/// Replace each run of characters other than letters, digits, `-` and space
/// with a single space.
///
/// Punctuation, parentheses and line breaks are all flattened; applying the
/// function twice gives the same result as applying it once.
pub fn sanitize_description(text: &str) -> String {
    match DISALLOWED.as_ref() {
        Some(pattern) => pattern.replace_all(text, " ").into_owned(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(DISALLOWED.is_some());
    }

    #[test]
    fn test_punctuation_replaced() {
        assert_eq!(
            sanitize_description("Ausgabe 2024 (Sommer)."),
            "Ausgabe 2024  Sommer "
        );
    }

    #[test]
    fn test_umlauts_and_hyphens_kept() {
        assert_eq!(
            sanitize_description("Frühjahr-Ausgabe Nr. 3"),
            "Frühjahr-Ausgabe Nr  3"
        );
    }

    #[test]
    fn test_line_breaks_collapse() {
        assert_eq!(sanitize_description("Heft\n\t 1"), "Heft  1");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize_description("Seniorenzeitung: 1/2025 (PDF, 3 MB)");
        assert_eq!(sanitize_description(&once), once);
    }
}
