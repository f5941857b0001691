//! # styloprint-text
//!
//! Segmentation shared by every feature extractor, so all scores are
//! computed over the same sentences and words.
//!
//! * Sentences: split on runs of `.`, `!`, `?`; trimmed; empty fragments dropped.
//! * Words: split on Unicode whitespace.

#![forbid(unsafe_code)]

use std::str::SplitWhitespace;

use styloprint_math::per_unit;

/// Long words common enough that their length says nothing about vocabulary.
const COMMON_LONG_WORDS: [&str; 35] = [
    "everything",
    "something",
    "important",
    "different",
    "information",
    "understand",
    "sometimes",
    "themselves",
    "government",
    "development",
    "experience",
    "especially",
    "interesting",
    "everyone",
    "business",
    "together",
    "probably",
    "actually",
    "remember",
    "although",
    "question",
    "yourself",
    "children",
    "possible",
    "continue",
    "anything",
    "whatever",
    "therefore",
    "including",
    "community",
    "throughout",
    "particular",
    "individual",
    "beautiful",
    "situation",
];

const RARE_WORD_MIN_CHARS: usize = 9;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Lazy sentence iterator. Cloning restarts from the clone point.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let (head, tail) = match self.rest.find(is_terminator) {
                Some(idx) => {
                    let after = &self.rest[idx..];
                    let skip = after.find(|c| !is_terminator(c)).unwrap_or(after.len());
                    (&self.rest[..idx], &after[skip..])
                }
                None => (self.rest, ""),
            };
            self.rest = tail;
            let trimmed = head.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
        None
    }
}

/// Split `text` into sentences.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { rest: text }
}

/// Split `text` into whitespace-delimited words.
pub fn words(text: &str) -> SplitWhitespace<'_> {
    text.split_whitespace()
}

/// Strip leading/trailing punctuation from a word token.
pub fn normalize_word(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Join document bodies into one corpus text.
pub fn join_corpus<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for part in parts {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// A sentence is embedded when it has a comma and more than two comma-delimited segments.
pub fn is_embedded(sentence: &str) -> bool {
    sentence.contains(',') && sentence.split(',').count() > 2
}

/// Rare: longer than eight characters and not a common long word.
pub fn is_rare_word(token: &str) -> bool {
    let word = normalize_word(token);
    if word.chars().count() < RARE_WORD_MIN_CHARS {
        return false;
    }
    let lower = word.to_lowercase();
    !COMMON_LONG_WORDS.contains(&lower.as_str())
}

/// Surface statistics for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
    pub embedded_sentences: usize,
    pub comma_segments: usize,
    pub rare_words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let mut stats = TextStats::default();
        for word in words(text) {
            stats.word_count += 1;
            stats.char_count += word.chars().count();
            if is_rare_word(word) {
                stats.rare_words += 1;
            }
        }
        for sentence in sentences(text) {
            stats.sentence_count += 1;
            stats.comma_segments += sentence.split(',').count();
            if is_embedded(sentence) {
                stats.embedded_sentences += 1;
            }
        }
        stats
    }

    /// Words per sentence.
    pub fn avg_sentence_length(&self) -> f64 {
        per_unit(self.word_count as f64, self.sentence_count)
    }

    /// Characters per word.
    pub fn avg_word_length(&self) -> f64 {
        per_unit(self.char_count as f64, self.word_count)
    }

    /// Words per comma-delimited segment.
    pub fn avg_segment_length(&self) -> f64 {
        per_unit(self.word_count as f64, self.comma_segments)
    }
}
