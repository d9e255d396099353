//! Heuristic sentence splitting and word tokenization
//!
//! This crate divides free-form prose into sentences, then divides each
//! sentence into words and punctuation marks. Decisions come from small,
//! hand-tuned rules rather than a trained model: a character classifier,
//! a lookahead that skips spaces, and compiled-in tables of abbreviations
//! and honorifics.
//!
//! # Architecture
//!
//! - **Domain layer**: character classes, lookahead and the sentence
//!   boundary decision, all pure functions over a [`TextBuffer`]
//! - **Language data**: abbreviation and honorific tables
//! - **Application layer**: the sentence splitter and the tokenizer
//! - **API**: [`Input`] sources and [`Output`] summaries
//!
//! # Example
//!
//! ```rust
//! use hakilo_core::{split_sentence, split_text};
//!
//! let sentences = split_text("She said, \"Stop!\" Then left.");
//! assert_eq!(sentences, vec!["She said, \"Stop!\"", "Then left."]);
//!
//! let tokens = split_sentence(&sentences[1]);
//! assert_eq!(tokens, vec!["Then", "left", "."]);
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod language;
pub mod types;

pub use api::{process, process_text, Input, Metadata, Output};
pub use application::{sentences, split_sentence, split_text, tokenize};
pub use domain::TextBuffer;
pub use error::{Error, Result};
pub use types::{Sentence, Token, TokenKind};
