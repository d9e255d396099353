//! Sentence boundary decisions
//!
//! Each decision is a pure function of the text and a candidate index. A
//! decision also says where scanning resumes, which lets the caller skip
//! over runs such as `"..."` or a closing quote after the punctuation.

use super::class::{is_line_break, is_pqx, CharClass};
use super::scanner::what_follows;
use super::text::TextBuffer;
use crate::language::AbbreviationTable;

/// Longest alphabetic run examined before an abbreviation period
const MAX_ABBREVIATION_LETTERS: usize = 7;

/// Outcome of a decide-and-advance probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// True if the probed position ends a sentence
    pub matched: bool,
    /// Index where scanning continues
    pub next_index: usize,
}

impl Step {
    #[inline]
    fn end(next_index: usize) -> Self {
        Self {
            matched: true,
            next_index,
        }
    }

    #[inline]
    fn skip(next_index: usize) -> Self {
        Self {
            matched: false,
            next_index,
        }
    }
}

/// Decide whether the character at `index` ends a sentence
///
/// Runs out of text always end the sentence. A `.`, `?` or `!` ends it
/// when followed by a line break, or by an uppercase letter that does not
/// belong to an initial or a known abbreviation, or by a closing quote or
/// bracket that is itself followed by an uppercase letter. Control
/// characters end it only as part of a blank line or a form feed.
pub fn is_eos(text: &TextBuffer, index: usize) -> Step {
    if index >= text.len() {
        return Step::end(index);
    }

    let ch = text.char_at(index);
    if is_pqx(ch) {
        // Periods inside "U.S.A." are glued to the next letter
        if alpha_immediately_after(text, index) {
            return Step::skip(index + 1);
        }

        let next = what_follows(text, index);
        match next.class {
            CharClass::LineBreak => Step::end(next.index),
            CharClass::Uppercase => {
                if initial_precedes(text, index) || known_abbreviation(text, index) {
                    Step::skip(next.index)
                } else {
                    Step::end(next.index)
                }
            }
            CharClass::EndQuote | CharClass::EndBracket => {
                let after = what_follows(text, next.index);
                Step {
                    matched: after.class == CharClass::Uppercase,
                    next_index: after.index,
                }
            }
            _ => Step::skip(index + 1),
        }
    } else if ch < ' ' {
        blank_line_or_form_feed(text, index)
    } else {
        Step::skip(index + 1)
    }
}

/// True if the punctuation at `index` follows a single capital initial
///
/// The capital must open the text or follow a space, a period or a line
/// break, as in "J. K. Rowling".
pub fn initial_precedes(text: &TextBuffer, index: usize) -> bool {
    if index == 0 {
        return false;
    }
    if !text.char_at(index - 1).is_uppercase() {
        return false;
    }
    if index == 1 {
        return true;
    }
    let before = text.char_at(index - 2);
    before == ' ' || before == '.' || is_line_break(before)
}

/// True if a known honorific or abbreviation ends with the period at `index`
///
/// The candidate starts after the last non-alphabetic character before the
/// period, looking back at most seven letters.
pub fn known_abbreviation(text: &TextBuffer, index: usize) -> bool {
    if index == 0 || index >= text.len() {
        return false;
    }

    let mut start = index;
    while start > 0 {
        let ch = text.char_at(start - 1);
        if !ch.is_alphabetic() || index - (start - 1) > MAX_ABBREVIATION_LETTERS {
            break;
        }
        start -= 1;
    }

    AbbreviationTable::global().known_at(text, start)
}

/// True if the character right after `index` is alphabetic
pub fn alpha_immediately_after(text: &TextBuffer, index: usize) -> bool {
    text.get(index + 1).is_some_and(char::is_alphabetic)
}

/// Blank lines, form feeds and vertical tabs end a sentence
///
/// Recognised sequences, tried in order: `\n\n`, `\r\n\r\n`, `\r\r` and
/// `\n\t`. Scanning resumes after the whole sequence. Any other control
/// character is stepped over.
pub fn blank_line_or_form_feed(text: &TextBuffer, index: usize) -> Step {
    const BLANK_LINES: [&str; 4] = ["\n\n", "\r\n\r\n", "\r\r", "\n\t"];

    for pattern in BLANK_LINES {
        if text.matches_str_at(index, pattern) {
            return Step::end(index + pattern.len());
        }
    }

    match text.get(index) {
        Some('\u{000C}' | '\u{000B}') => Step::end(index + 1),
        _ => Step::skip(index + 1),
    }
}

/// Index just past the end of the sentence that begins at `start`
///
/// Returns `None` when `start` is already at or past the end of the text.
pub fn find_end_of_sentence(text: &TextBuffer, start: usize) -> Option<usize> {
    if start >= text.len() {
        return None;
    }

    let mut index = start;
    loop {
        let step = is_eos(text, index);
        debug_assert!(step.next_index > index || step.matched);
        index = step.next_index;
        if step.matched || index >= text.len() {
            return Some(index);
        }
    }
}
