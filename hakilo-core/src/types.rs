//! Core output types

use core::fmt;

/// A sentence cut from the input text
///
/// `text` is trimmed of surrounding whitespace and always contains at
/// least one alphabetic character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    /// The sentence text
    pub text: String,
    /// Code-point offset of the first character in the input
    pub offset: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// Length in code points
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Kind of token produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenKind {
    /// Run of word characters, possibly with inner apostrophes or periods
    Word,
    /// Single punctuation character
    Punctuation,
}

/// A word or punctuation mark cut from a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The token text
    pub text: String,
    /// Code-point offset of the first character in the sentence
    pub offset: usize,
    /// Word or punctuation
    pub kind: TokenKind,
}

impl Token {
    pub fn word(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
            kind: TokenKind::Word,
        }
    }

    pub fn punctuation(ch: char, offset: usize) -> Self {
        Self {
            text: ch.to_string(),
            offset,
            kind: TokenKind::Punctuation,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
