//! Sentence tokenizer
//!
//! Splits one sentence into words and punctuation marks. Word characters
//! here are a wider, multi-script set than the letter test used for
//! boundary detection: ASCII letters and digits, the hyphen, Latin-1 and
//! Latin Extended letters, Greek and Cyrillic.

use crate::domain::TextBuffer;
use crate::types::Token;

/// Quote marks treated as standalone punctuation tokens
const QUOTE_MARKS: &[char] = &[
    '\'', '"', '\u{00AB}', '\u{2018}', '\u{201C}', // opening
    '\u{00BB}', '\u{2019}', '\u{201D}', // closing
];

/// Split `sentence` into word and punctuation strings
///
/// ```rust
/// use hakilo_core::split_sentence;
///
/// assert_eq!(
///     split_sentence("7.3 is a number."),
///     vec!["7.3", "is", "a", "number", "."]
/// );
/// ```
pub fn split_sentence(sentence: &str) -> Vec<String> {
    tokenize(sentence).into_iter().map(|t| t.text).collect()
}

/// Split `sentence` into tokens with offsets and kinds
pub fn tokenize(sentence: &str) -> Vec<Token> {
    let text = TextBuffer::new(sentence);
    let len = text.len();
    let last_word = last_word_character(&text);
    let mut tokens = Vec::new();
    let mut index = 0;

    while index < len {
        // Skip spaces and control characters
        while index < len && text.char_at(index) <= ' ' {
            index += 1;
        }
        if index >= len {
            break;
        }

        let ch = text.char_at(index);
        if ch == '.' {
            // A period with words after it is a decimal point or similar;
            // it is only kept when attached to a word.
            if period_ends_sentence(len, last_word, index) {
                tokens.push(Token::punctuation('.', index));
            }
            index += 1;
        } else if is_punctuation(ch) {
            tokens.push(Token::punctuation(ch, index));
            index += 1;
        } else if is_word_character(ch) {
            let end = word_end(&text, index, last_word);
            tokens.push(Token::word(text.slice(index, end), index));
            index = end;
        } else {
            index += 1;
        }
    }

    tokens
}

/// Index just past the word that starts at `start`
fn word_end(text: &TextBuffer, start: usize, last_word: Option<usize>) -> usize {
    let len = text.len();
    let mut end = start + 1;

    while end < len {
        let ch = text.char_at(end);
        if ch == '.' {
            if period_ends_sentence(len, last_word, end) {
                break;
            }
        } else if is_apostrophe(ch) {
            // Kept only inside a contraction such as "don't"
            if !text.get(end + 1).is_some_and(is_word_character) {
                break;
            }
        } else if !is_word_character(ch) {
            break;
        }
        end += 1;
    }

    end
}

/// True if the period at `index` ends the sentence
///
/// It does when it is the last or next-to-last character, or when no word
/// character follows it.
pub fn end_of_sentence(text: &TextBuffer, index: usize) -> bool {
    period_ends_sentence(text.len(), last_word_character(text), index)
}

/// Index of the last word character in `text`
fn last_word_character(text: &TextBuffer) -> Option<usize> {
    text.as_chars().iter().rposition(|&ch| is_word_character(ch))
}

/// [`end_of_sentence`] with the last word character already located
#[inline]
fn period_ends_sentence(len: usize, last_word: Option<usize>, index: usize) -> bool {
    index + 1 >= len || last_word.map_or(true, |last| index > last)
}

/// Punctuation emitted as a single-character token
///
/// The period is excluded: it may belong to a number or an abbreviation.
pub fn is_punctuation(ch: char) -> bool {
    match ch {
        '.' => false,
        '!'..='/' | ':'..='@' | '\u{2013}' => true,
        _ => is_quote_mark(ch),
    }
}

pub fn is_quote_mark(ch: char) -> bool {
    QUOTE_MARKS.contains(&ch)
}

/// Character that may be part of a word
pub fn is_word_character(ch: char) -> bool {
    matches!(ch,
        'a'..='z'
        | 'A'..='Z'
        | '0'..='9'
        | '-'
        // Latin-1 letters through IPA extensions
        | '\u{00C0}'..='\u{02BF}'
        // Greek, Cyrillic and Cyrillic Supplement
        | '\u{0386}'..='\u{0513}'
    )
}

/// Straight, right single quote, or modifier letter apostrophe
pub fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '\u{02BC}')
}
