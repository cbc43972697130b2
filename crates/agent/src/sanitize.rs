//! Reply sanitization.
//!
//! Reduces a raw model reply to plain ASCII words and basic punctuation.
//! Steps run in a fixed order:
//!
//! 1. drop hashtags (`#` followed by letters, numbers or underscores)
//! 2. turn each run of newlines/tabs into one space
//! 3. drop every character outside [`is_allowed`]
//! 4. collapse whitespace runs to one space and trim
//!
//! The colon is not on the allow-list, so `intent: Time` comes back as
//! `intent Time`.

use regex::Regex;
use std::sync::LazyLock;

// Letters, numbers and underscore only. Unicode `\w` would also take
// combining marks and joiners.
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[\p{L}\p{N}_]+").expect("valid regex"));

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\t]+").expect("valid regex"));

/// Whether `c` may appear in a sanitized reply.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | ',' | '?' | '!' | '\'' | '"' | '-')
}

/// Sanitize a raw model reply. Total and idempotent; `""` maps to `""`.
pub fn sanitize_reply(raw: &str) -> String {
    let without_tags = HASHTAG_RE.replace_all(raw, "");
    let single_line = LINE_BREAK_RE.replace_all(&without_tags, " ");
    let filtered: String = single_line.chars().filter(|c| is_allowed(*c)).collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "hello #world foo",
        "Intent: Time\n\n#tag  multiple   spaces",
        "intent: Location\ndependent: True",
        "#only#tags#here",
        "café ☕ #über naïve",
        "\t\ttabs\tand\nnewlines\r\n",
        "quotes \"double\" and 'single' - dash!?",
        "emoji 🚀🚀 between words",
        "a#b c # d",
        "semi;colon: (parens) [brackets] {braces} 100%",
        "###",
        "#_under_score keep",
    ];

    #[test]
    fn removes_hashtags() {
        assert_eq!(sanitize_reply("hello #world foo"), "hello foo");
    }

    #[test]
    fn intent_reply_example() {
        assert_eq!(
            sanitize_reply("Intent: Time\n\n#tag  multiple   spaces"),
            "Intent Time multiple spaces"
        );
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(sanitize_reply(""), "");
        assert_eq!(sanitize_reply(" \n\t "), "");
    }

    #[test]
    fn colons_and_brackets_are_stripped() {
        assert_eq!(
            sanitize_reply("semi;colon: (parens) [brackets] {braces} 100%"),
            "semicolon parens brackets braces 100"
        );
    }

    #[test]
    fn allowed_punctuation_survives() {
        assert_eq!(
            sanitize_reply("quotes \"double\" and 'single' - dash!?"),
            "quotes \"double\" and 'single' - dash!?"
        );
    }

    #[test]
    fn unicode_word_hashtags_removed_whole() {
        assert_eq!(sanitize_reply("café ☕ #über naïve"), "caf nave");
    }

    #[test]
    fn combining_mark_ends_hashtag() {
        assert_eq!(sanitize_reply("x #e\u{301}abc y"), "x abc y");
    }

    #[test]
    fn non_decimal_numbers_extend_hashtag() {
        assert_eq!(sanitize_reply("x #\u{b2}abc y"), "x y");
        assert_eq!(sanitize_reply("x #\u{2166}_v2 y"), "x y");
    }

    #[test]
    fn carriage_return_collapses_with_other_whitespace() {
        assert_eq!(sanitize_reply("\t\ttabs\tand\nnewlines\r\n"), "tabs and newlines");
    }

    #[test]
    fn hashtag_inside_word_truncates_it() {
        assert_eq!(sanitize_reply("a#b c # d"), "a c d");
    }

    #[test]
    fn output_only_contains_allowed_characters() {
        for sample in SAMPLES {
            let out = sanitize_reply(sample);
            assert!(out.chars().all(is_allowed), "{sample:?} -> {out:?}");
            assert!(!out.contains("  "), "{sample:?} -> {out:?}");
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn sanitizing_twice_changes_nothing() {
        for sample in SAMPLES {
            let once = sanitize_reply(sample);
            assert_eq!(sanitize_reply(&once), once, "input {sample:?}");
        }
    }
}
