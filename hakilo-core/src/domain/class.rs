//! Character classification for sentence boundary detection

/// Quote marks that may close a quotation
pub const END_QUOTE_MARKS: &[char] = &[
    '\'', '"', '\u{00BB}', '\u{203A}', '\u{2019}', '\u{201D}', '\u{275E}', '\u{301E}', '\u{275C}',
    '\u{276F}',
];

/// Quote marks that may open a quotation
pub const START_QUOTE_MARKS: &[char] = &[
    '\'', '"', '\u{00AB}', '\u{2039}', '\u{2018}', '\u{201C}', '\u{275D}', '\u{301D}', '\u{275B}',
    '\u{276E}',
];

/// Brackets that may close a parenthetical
pub const END_BRACKETS: &[char] = &[')', ']', '}', '\u{FF08}', '\u{FF3B}', '\u{FF5B}'];

/// Brackets that may open a parenthetical
pub const START_BRACKETS: &[char] = &['(', '[', '{', '\u{FF09}', '\u{FF3D}', '\u{FF5D}'];

/// Category of a single character as seen by the boundary detector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Anything not covered below
    Other,
    /// Period, question mark or exclamation mark
    Pqx,
    /// Uppercase letter
    Uppercase,
    /// Lowercase letter
    Lowercase,
    /// Newline, carriage return, form feed or vertical tab
    LineBreak,
    /// Scan ran past the last character
    EndOfInput,
    /// Opening quote mark
    StartQuote,
    /// Closing quote mark
    EndQuote,
    /// Opening bracket
    StartBracket,
    /// Closing bracket
    EndBracket,
    /// Comma
    Comma,
    /// Colon or semicolon (one category, never distinguished)
    ColonOrSemicolon,
    /// Position before the first character
    StartOfInput,
    /// Plain space
    Space,
}

/// Period, question mark or exclamation mark
#[inline]
pub fn is_pqx(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!')
}

/// `\n`, `\r`, form feed or vertical tab
#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{000C}' | '\u{000B}')
}

#[inline]
pub fn is_end_quote(ch: char) -> bool {
    END_QUOTE_MARKS.contains(&ch)
}

#[inline]
pub fn is_start_quote(ch: char) -> bool {
    START_QUOTE_MARKS.contains(&ch)
}

#[inline]
pub fn is_end_bracket(ch: char) -> bool {
    END_BRACKETS.contains(&ch)
}

#[inline]
pub fn is_start_bracket(ch: char) -> bool {
    START_BRACKETS.contains(&ch)
}

/// Classify a character by value alone
///
/// Rules apply in priority order: sentence-ending punctuation, uppercase,
/// lowercase, line break. Quotes and brackets are only recognised by
/// [`classify_following`].
pub fn classify(ch: char) -> CharClass {
    if is_pqx(ch) {
        CharClass::Pqx
    } else if ch.is_uppercase() {
        CharClass::Uppercase
    } else if ch.is_lowercase() {
        CharClass::Lowercase
    } else if is_line_break(ch) {
        CharClass::LineBreak
    } else {
        CharClass::Other
    }
}

/// Classification used when peeking past a candidate boundary
///
/// Extends [`classify`] with closing quotes and closing brackets, which
/// matter only for the character that follows sentence punctuation.
pub fn classify_following(ch: char) -> CharClass {
    match classify(ch) {
        CharClass::Other if is_end_quote(ch) => CharClass::EndQuote,
        CharClass::Other if is_end_bracket(ch) => CharClass::EndBracket,
        class => class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_punctuation() {
        for ch in ['.', '?', '!'] {
            assert_eq!(classify(ch), CharClass::Pqx);
        }
        assert_eq!(classify(','), CharClass::Other);
        assert_eq!(classify(';'), CharClass::Other);
    }

    #[test]
    fn test_letter_case_is_unicode_aware() {
        assert_eq!(classify('A'), CharClass::Uppercase);
        assert_eq!(classify('Ĝ'), CharClass::Uppercase);
        assert_eq!(classify('Ж'), CharClass::Uppercase);
        assert_eq!(classify('a'), CharClass::Lowercase);
        assert_eq!(classify('ŝ'), CharClass::Lowercase);
        assert_eq!(classify('λ'), CharClass::Lowercase);
        // No case
        assert_eq!(classify('日'), CharClass::Other);
        assert_eq!(classify('7'), CharClass::Other);
    }

    #[test]
    fn test_line_breaks() {
        for ch in ['\n', '\r', '\u{000C}', '\u{000B}'] {
            assert_eq!(classify(ch), CharClass::LineBreak);
        }
        assert_eq!(classify('\t'), CharClass::Other);
        assert_eq!(classify(' '), CharClass::Other);
    }

    #[test]
    fn test_quotes_only_in_following_classification() {
        assert_eq!(classify('"'), CharClass::Other);
        assert_eq!(classify_following('"'), CharClass::EndQuote);
        assert_eq!(classify_following('\u{201D}'), CharClass::EndQuote);
        assert_eq!(classify_following('\u{00BB}'), CharClass::EndQuote);
        assert_eq!(classify_following('\''), CharClass::EndQuote);
        // Opening curly quote is not a closing one
        assert_eq!(classify_following('\u{201C}'), CharClass::Other);
    }

    #[test]
    fn test_brackets_only_in_following_classification() {
        assert_eq!(classify(')'), CharClass::Other);
        assert_eq!(classify_following(')'), CharClass::EndBracket);
        assert_eq!(classify_following(']'), CharClass::EndBracket);
        assert_eq!(classify_following('}'), CharClass::EndBracket);
        assert_eq!(classify_following('('), CharClass::Other);
    }

    #[test]
    fn test_following_keeps_priority_of_base_rules() {
        assert_eq!(classify_following('!'), CharClass::Pqx);
        assert_eq!(classify_following('B'), CharClass::Uppercase);
        assert_eq!(classify_following('\n'), CharClass::LineBreak);
    }

    #[test]
    fn test_start_sets() {
        assert!(is_start_quote('\u{00AB}'));
        assert!(is_start_quote('"'));
        assert!(!is_start_quote('\u{00BB}'));
        assert!(is_start_bracket('['));
        assert!(!is_start_bracket(']'));
    }
}
