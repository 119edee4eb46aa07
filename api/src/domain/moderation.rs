//! Comment moderation
//!
//! A comment is rejected outright if its text contains any banned
//! substring; nothing is persisted and the form is re-rendered with
//! `WARNING` attached to the `text` field. Matching is case-sensitive
//! substring search, anywhere in the text.

/// Substrings that may not appear in comment text
pub const BAD_WORDS: &[&str] = &["rascal", "scoundrel"];

/// Field-level warning attached to rejected comment text
pub const WARNING: &str = "Don't use offensive language!";

/// Returns the first banned word occurring in `text`, if any
pub fn find_banned_word(text: &str) -> Option<&'static str> {
    BAD_WORDS.iter().copied().find(|word| text.contains(word))
}

/// A text is clean when no banned substring occurs in it
pub fn is_clean(text: &str) -> bool {
    find_banned_word(text).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_clean() {
        assert!(is_clean("A perfectly ordinary comment."));
    }

    #[test]
    fn every_banned_word_is_detected() {
        for word in BAD_WORDS {
            let text = format!("Some text, {}, more text", word);
            assert_eq!(find_banned_word(&text), Some(*word));
        }
    }

    #[test]
    fn banned_word_inside_a_larger_word_still_matches() {
        // Substring matching: no word-boundary check
        assert!(!is_clean("what a scoundrelly thing to say"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(is_clean("RASCAL"));
        assert!(is_clean("Scoundrel"));
    }

    #[test]
    fn empty_text_is_clean() {
        assert!(is_clean(""));
    }
}
