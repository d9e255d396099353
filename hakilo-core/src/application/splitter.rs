//! Sentence splitter driving the boundary detector over a whole text

use tracing::{debug, trace};

use crate::domain::{find_end_of_sentence, TextBuffer};
use crate::types::Sentence;

/// Split `text` into sentences, in order
///
/// Fragments without any alphabetic character (stray punctuation, numbers
/// on their own, blank lines) are dropped.
///
/// ```rust
/// use hakilo_core::split_text;
///
/// let sentences = split_text("Dr. Smith went home. He was tired.");
/// assert_eq!(sentences, vec!["Dr. Smith went home.", "He was tired."]);
/// ```
pub fn split_text(text: &str) -> Vec<String> {
    sentences(text).into_iter().map(|s| s.text).collect()
}

/// Split `text` into sentences along with their offsets
pub fn sentences(text: &str) -> Vec<Sentence> {
    let buffer = TextBuffer::new(text);
    let sentences = sentences_in(&buffer);
    debug!(
        chars = buffer.len(),
        sentences = sentences.len(),
        "split text into sentences"
    );
    sentences
}

/// Split an already decoded buffer
pub fn sentences_in(buffer: &TextBuffer) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut index = 0;

    while let Some(end) = find_end_of_sentence(buffer, index) {
        assert!(end <= buffer.len(), "sentence end {end} past buffer");
        if let Some(sentence) = trimmed_sentence(buffer, index, end) {
            sentences.push(sentence);
        }
        index = end;
    }

    sentences
}

/// Trim `start..end` and keep it only if it has a letter in it
fn trimmed_sentence(buffer: &TextBuffer, start: usize, end: usize) -> Option<Sentence> {
    let chars = &buffer.as_chars()[start..end];
    let leading = chars.iter().take_while(|ch| ch.is_whitespace()).count();
    let trailing = chars[leading..]
        .iter()
        .rev()
        .take_while(|ch| ch.is_whitespace())
        .count();
    let body = &chars[leading..chars.len() - trailing];

    if !body.iter().any(|ch| ch.is_alphabetic()) {
        if !body.is_empty() {
            trace!(offset = start + leading, len = body.len(), "dropped fragment without letters");
        }
        return None;
    }

    Some(Sentence::new(
        body.iter().collect::<String>(),
        start + leading,
    ))
}
