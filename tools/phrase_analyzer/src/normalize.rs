//! Text normalization: raw exam text -> lowercase, token-ready string.
//!
//! The passes run in a fixed order; later patterns assume the earlier ones
//! already ran (e.g. option markers are matched after lowercasing).

use std::sync::LazyLock;

use regex::Regex;

/// Runs of blank-fill underscores (`____`).
static BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
/// Option letters: `(a)` .. `(e)` and bare `a)` .. `e)`.
static OPTION_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(?[a-e]\)").unwrap());
/// Standalone integers (question numbers, years).
static NUMBERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());
/// Anything that is not a word char, whitespace, or apostrophe.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s']").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Clean a piece of question text for frequency analysis.
///
/// Returns an empty string for empty input. Punctuation is replaced by a
/// space (not deleted) so hyphenated or slashed words split into tokens.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lowered = text.to_lowercase();
    let s = BLANKS.replace_all(&lowered, " ");
    let s = OPTION_MARKERS.replace_all(&s, "");
    let s = NUMBERS.replace_all(&s, "");
    let s = PUNCTUATION.replace_all(&s, " ");
    let s = WHITESPACE.replace_all(&s, " ");
    s.trim().to_owned()
}

/// Same as [`normalize`] for optional fields; `None` yields an empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn test_lowercase_and_blanks() {
        assert_eq!(normalize("He ____ the Offer"), "he the offer");
        assert_eq!(normalize("word_word"), "word word");
    }

    #[test]
    fn test_option_markers() {
        assert_eq!(normalize("(A) give up (B) take over"), "give up take over");
        assert_eq!(normalize("a) first b) second"), "first second");
        // (f) is outside the option range
        assert_eq!(normalize("(f) sixth"), "f sixth");
    }

    #[test]
    fn test_numbers_removed_only_when_standalone() {
        assert_eq!(normalize("12. In 1990 the 1990s began"), "in the 1990s began");
    }

    #[test]
    fn test_punctuation_and_apostrophes() {
        assert_eq!(normalize("It's well-known, isn't it?"), "it's well known isn't it");
        assert_eq!(normalize("\"quoted\"; (this)!"), "quoted this");
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(normalize("Café NAÏVE"), "café naïve");
    }

    #[test]
    fn test_only_noise() {
        assert_eq!(normalize("1. ____ (A) ... 2"), "");
    }
}
