//! Compiled-in abbreviation and honorific tables
//!
//! Entries include their trailing period and are matched case-sensitively,
//! so capitalised and lowercase spellings are listed separately.

use std::sync::OnceLock;

use crate::domain::text::TextBuffer;

/// Abbreviations whose final period does not end a sentence
pub const ABBREVIATIONS: &[&str] = &["cf.", "e.g.", "eg.", "i.e.", "ie.", "vs.", "viz."];

/// Titles that precede a capitalised name
pub const HONORIFICS: &[&str] = &[
    "Mr.", "mr.", "Mrs.", "mrs.", "Ms.", "ms.", "Messrs.", "messrs.", //
    "Dr.", "dr.", "Prof.", "prof.", "St.", "st.", "Inĝ.", "inĝ.", //
    "Rev.", "rev.", "Br.", "br.", "Sr.", "sr.", "Fr.", "fr.", //
    // Military ranks
    "Adm.", "adm.", "Brig.", "brig.", "Capt.", "capt.", "Cmdr.", "cmdr.", //
    "Col.", "col.", "Cpl.", "cpl.", "Gen.", "gen.", "Lt.", "lt.", "Maj.", "maj.", //
    "Pfc.", "pfc.", "Pvt.", "pvt.", "Pte.", "pte.", "Sgt.", "sgt.", //
    "habil.",
];

static GLOBAL: OnceLock<AbbreviationTable> = OnceLock::new();

/// Abbreviation and honorific entries pre-decoded into code points
#[derive(Debug, Clone)]
pub struct AbbreviationTable {
    honorifics: Vec<Vec<char>>,
    abbreviations: Vec<Vec<char>>,
}

impl AbbreviationTable {
    /// Build a table from explicit entry lists
    pub fn new(honorifics: &[&str], abbreviations: &[&str]) -> Self {
        let decode = |entries: &[&str]| -> Vec<Vec<char>> {
            entries.iter().map(|entry| entry.chars().collect()).collect()
        };
        Self {
            honorifics: decode(honorifics),
            abbreviations: decode(abbreviations),
        }
    }

    /// The process-wide table built from [`HONORIFICS`] and [`ABBREVIATIONS`]
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::new(HONORIFICS, ABBREVIATIONS))
    }

    /// True if an honorific occurs in `text` exactly at `start`
    pub fn honorific_at(&self, text: &TextBuffer, start: usize) -> bool {
        self.honorifics
            .iter()
            .any(|entry| text.matches_at(start, entry))
    }

    /// True if an abbreviation occurs in `text` exactly at `start`
    pub fn abbreviation_at(&self, text: &TextBuffer, start: usize) -> bool {
        self.abbreviations
            .iter()
            .any(|entry| text.matches_at(start, entry))
    }

    /// True if either table has an entry at `start`
    pub fn known_at(&self, text: &TextBuffer, start: usize) -> bool {
        self.honorific_at(text, start) || self.abbreviation_at(text, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_ends_with_period() {
        for entry in HONORIFICS.iter().chain(ABBREVIATIONS) {
            assert!(entry.ends_with('.'), "{entry} lacks a period");
        }
    }

    #[test]
    fn test_honorific_match_is_anchored() {
        let table = AbbreviationTable::global();
        let text = TextBuffer::new("Dr. Who");
        assert!(table.honorific_at(&text, 0));
        assert!(!table.honorific_at(&text, 1));
    }

    #[test]
    fn test_case_sensitive() {
        let table = AbbreviationTable::global();
        assert!(table.known_at(&TextBuffer::new("prof."), 0));
        assert!(!table.known_at(&TextBuffer::new("PROF."), 0));
    }

    #[test]
    fn test_prefix_of_longer_word_does_not_match() {
        let table = AbbreviationTable::global();
        // "Dre" is not "Dr."
        assert!(!table.known_at(&TextBuffer::new("Drew."), 0));
    }

    #[test]
    fn test_non_ascii_entry() {
        let table = AbbreviationTable::global();
        assert!(table.honorific_at(&TextBuffer::new("Inĝ. Zamenhof"), 0));
    }

    #[test]
    fn test_abbreviations() {
        let table = AbbreviationTable::global();
        assert!(table.abbreviation_at(&TextBuffer::new("vs. Them"), 0));
        assert!(table.abbreviation_at(&TextBuffer::new("viz. X"), 0));
        assert!(!table.honorific_at(&TextBuffer::new("vs. Them"), 0));
    }

    #[test]
    fn test_custom_table() {
        let table = AbbreviationTable::new(&["Hr."], &[]);
        assert!(table.known_at(&TextBuffer::new("Hr. Olsen"), 0));
        assert!(!table.known_at(&TextBuffer::new("Mr. Olsen"), 0));
    }

    #[test]
    fn test_entry_past_end_does_not_match() {
        let table = AbbreviationTable::global();
        assert!(!table.known_at(&TextBuffer::new("Mr"), 0));
    }
}
