//! Text collaborator
//!
//! Supplies word tokens and sentences to the graph builders. The builders
//! depend only on the [`TextCollaborator`] trait; [`RegexTextParser`] is the
//! default implementation.

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of ASCII alphanumerics, joined by internal hyphens
const WORD_PATTERN: &str = r"\b[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*\b";

/// Sentence-final punctuation, the whitespace after it, and the capital that opens the next sentence
const SENTENCE_BREAK_PATTERN: &str = r"[.!?](\s+)[A-Z]";

/// Tokenization and sentence segmentation consumed by the graph builders
pub trait TextCollaborator {
    /// Ordered word tokens, optionally lowercased
    fn tokenize(&self, text: &str, lowercase: bool) -> Vec<String>;

    /// Ordered, trimmed, non-empty sentences
    fn segment_sentences(&self, text: &str) -> Vec<String>;
}

/// Regex-based tokenizer and sentence splitter
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTextParser;

impl RegexTextParser {
    pub fn new() -> Self {
        RegexTextParser
    }
}

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern is valid"));

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENTENCE_BREAK_PATTERN).expect("sentence pattern is valid"));

impl TextCollaborator for RegexTextParser {
    fn tokenize(&self, text: &str, lowercase: bool) -> Vec<String> {
        WORD
            .find_iter(text)
            .map(|m| {
                if lowercase {
                    m.as_str().to_lowercase()
                } else {
                    m.as_str().to_string()
                }
            })
            .collect()
    }

    fn segment_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        // Cut inside the whitespace run; the punctuation stays with its sentence
        for caps in SENTENCE_BREAK.captures_iter(text) {
            if let Some(gap) = caps.get(1) {
                sentences.push(&text[start..gap.start()]);
                start = gap.end();
            }
        }
        sentences.push(&text[start..]);

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words() {
        let parser = RegexTextParser::new();
        let tokens = parser.tokenize("Well-known facts: the cat's 3 toys!", false);
        assert_eq!(tokens, vec!["Well-known", "facts", "the", "cat", "s", "3", "toys"]);
    }

    #[test]
    fn test_tokenize_lowercase() {
        let parser = RegexTextParser::new();
        assert_eq!(parser.tokenize("The Cat", true), vec!["the", "cat"]);
        assert!(parser.tokenize("  ...  ", true).is_empty());
    }

    #[test]
    fn test_trailing_hyphen_not_included() {
        let parser = RegexTextParser::new();
        assert_eq!(parser.tokenize("pre- and post-war", false), vec!["pre", "and", "post-war"]);
    }

    #[test]
    fn test_segment_sentences() {
        let parser = RegexTextParser::new();
        let sentences = parser.segment_sentences("The cat sat. The dog sat!  Did the bird fly? yes it did.");
        assert_eq!(
            sentences,
            vec!["The cat sat.", "The dog sat!", "Did the bird fly? yes it did."]
        );
    }

    #[test]
    fn test_segment_sentences_single_letter_sentences() {
        let parser = RegexTextParser::new();
        assert_eq!(parser.segment_sentences("A. B. C."), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_segment_sentences_trims_and_drops_empty() {
        let parser = RegexTextParser::new();
        assert!(parser.segment_sentences("   \n  ").is_empty());
        assert_eq!(
            parser.segment_sentences("\n  Knowledge connects.\n  Wisdom relates.\n"),
            vec!["Knowledge connects.", "Wisdom relates."]
        );
    }
}
