//! Domain layer: character classes, lookahead and boundary decisions
//!
//! Everything here is a pure function over an immutable [`TextBuffer`].

pub mod boundary;
pub mod class;
pub mod scanner;
pub mod text;

pub use boundary::{find_end_of_sentence, is_eos, Step};
pub use class::{classify, classify_following, CharClass};
pub use scanner::{what_follows, Lookahead};
pub use text::TextBuffer;
