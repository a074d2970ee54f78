//! Reading time estimation

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Average adult reading speed
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

lazy_static! {
    /// A CJK character counts as one word on its own; any other run of
    /// non-space characters is a word unless it starts with punctuation.
    static ref WORD: Regex = Regex::new(
        r"[\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]|[^\s\p{P}\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}][^\s\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]*"
    )
    .expect("word pattern is valid");
}

/// Estimated time to read a piece of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTime {
    /// Human readable estimate, e.g. "3 min read"
    pub text: String,
    /// Exact minutes
    pub minutes: f64,
    /// Milliseconds
    pub time: u64,
    pub words: usize,
}

impl ReadingTime {
    /// Estimate reading time of `text` at the default speed
    pub fn of(text: &str) -> Self {
        Self::with_speed(text, DEFAULT_WORDS_PER_MINUTE)
    }

    /// Estimate reading time of `text` at `words_per_minute`
    pub fn with_speed(text: &str, words_per_minute: u32) -> Self {
        let words = count_words(text);
        let minutes = words as f64 / f64::from(words_per_minute.max(1));
        let time = (minutes * 60_000.0).round() as u64;
        // Round to hundredths first so 2.001 minutes still reads as "2 min read"
        let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;

        Self {
            text: format!("{} min read", displayed),
            minutes,
            time,
            words,
        }
    }
}

/// Count words in text
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t "), 0);
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("  hello,   world!  "), 2);
        assert_eq!(count_words("well-known e.g. co-op"), 3);
    }

    #[test]
    fn test_cjk_characters_are_words() {
        assert_eq!(count_words("你好世界"), 4);
        assert_eq!(count_words("你好，世界"), 4);
        assert_eq!(count_words("Rust 很好"), 3);
        assert_eq!(count_words("こんにちは"), 5);
    }

    #[test]
    fn test_standalone_punctuation_is_not_a_word() {
        assert_eq!(count_words("wait — what ?"), 2);
    }

    #[test]
    fn test_empty_text() {
        let rt = ReadingTime::of("");
        assert_eq!(rt.words, 0);
        assert_eq!(rt.minutes, 0.0);
        assert_eq!(rt.time, 0);
        assert_eq!(rt.text, "0 min read");
    }

    #[test]
    fn test_rounds_up_to_whole_minutes() {
        let text = vec!["word"; 210].join(" ");
        let rt = ReadingTime::of(&text);
        assert_eq!(rt.words, 210);
        assert_eq!(rt.text, "2 min read");
        assert_eq!(rt.time, 63_000);
    }

    #[test]
    fn test_exact_minutes() {
        let text = vec!["word"; 400].join(" ");
        let rt = ReadingTime::of(&text);
        assert_eq!(rt.minutes, 2.0);
        assert_eq!(rt.text, "2 min read");
    }

    #[test]
    fn test_custom_speed() {
        let text = vec!["word"; 100].join(" ");
        assert_eq!(ReadingTime::with_speed(&text, 50).text, "2 min read");
        // A zero speed must not divide by zero
        assert_eq!(ReadingTime::with_speed(&text, 0).words, 100);
    }

    #[test]
    fn test_monotonic_in_word_count() {
        let mut previous = ReadingTime::of("");
        for n in 1..=1000 {
            let text = vec!["w"; n].join(" ");
            let current = ReadingTime::of(&text);
            assert!(current.minutes >= previous.minutes);
            assert!(current.time >= previous.time);
            previous = current;
        }
    }
}
