//! Random-access character buffer shared by the detector and the tokenizer
//!
//! Every index handled by this crate is a code-point index into a
//! [`TextBuffer`], never a byte offset. The boundary heuristics probe
//! backwards and forwards around a candidate position, so the text is held
//! as a `Vec<char>` rather than walked as a stream.

/// Immutable sequence of the code points of one input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl TextBuffer {
    /// Decode `text` into a buffer of code points
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of code points
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the buffer holds no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers check bounds first; an
    /// overrun here is a logic error in the caller.
    #[inline]
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Character at `index`, or `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// True if `pattern` occurs in the buffer starting exactly at `index`
    ///
    /// Comparison is case-sensitive. A pattern that would run past the end
    /// never matches.
    pub fn matches_at(&self, index: usize, pattern: &[char]) -> bool {
        match index.checked_add(pattern.len()) {
            Some(end) if end <= self.chars.len() => &self.chars[index..end] == pattern,
            _ => false,
        }
    }

    /// Same as [`TextBuffer::matches_at`] for a string pattern
    pub fn matches_str_at(&self, index: usize, pattern: &str) -> bool {
        let mut i = index;
        for expected in pattern.chars() {
            match self.get(i) {
                Some(ch) if ch == expected => i += 1,
                _ => return false,
            }
        }
        true
    }

    /// Copy of the characters in `start..end`
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Underlying characters
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
