//! Lookahead past plain spaces

use super::class::{classify_following, CharClass};
use super::text::TextBuffer;

/// What the scanner found after a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookahead {
    /// Category of the first non-space character, or `EndOfInput`
    pub class: CharClass,
    /// Index of that character, or the buffer length at end of input
    pub index: usize,
}

/// Classify the first character after `index` that is not a plain space
///
/// Only U+0020 is skipped; tabs and line breaks are reported.
pub fn what_follows(text: &TextBuffer, index: usize) -> Lookahead {
    let mut i = index + 1;
    while i < text.len() {
        let ch = text.char_at(i);
        if ch != ' ' {
            return Lookahead {
                class: classify_following(ch),
                index: i,
            };
        }
        i += 1;
    }
    Lookahead {
        class: CharClass::EndOfInput,
        index: text.len(),
    }
}
