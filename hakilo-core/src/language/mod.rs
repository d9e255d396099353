//! Compiled-in language data for boundary detection

pub mod tables;

pub use tables::{AbbreviationTable, ABBREVIATIONS, HONORIFICS};
