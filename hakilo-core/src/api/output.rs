//! Processing output

use crate::types::Sentence;

/// Summary numbers for one processed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Code points in the input
    pub total_chars: usize,
    /// Sentences produced
    pub sentence_count: usize,
}

/// Sentences of one input plus summary numbers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    pub sentences: Vec<Sentence>,
    pub metadata: Metadata,
}

impl Output {
    pub fn new(sentences: Vec<Sentence>, total_chars: usize) -> Self {
        let metadata = Metadata {
            total_chars,
            sentence_count: sentences.len(),
        };
        Self {
            sentences,
            metadata,
        }
    }

    /// Sentence texts, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}
