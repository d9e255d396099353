//! Application layer: whole-text splitting and per-sentence tokenizing

pub mod splitter;
pub mod tokenizer;

pub use splitter::{sentences, sentences_in, split_text};
pub use tokenizer::{split_sentence, tokenize};
