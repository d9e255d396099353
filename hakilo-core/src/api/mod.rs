//! Input/output API around the splitter
//!
//! ```rust
//! use hakilo_core::{process, Input};
//!
//! let output = process(Input::from_text("J. K. Rowling wrote it. It sold.")).unwrap();
//! assert_eq!(output.metadata.sentence_count, 2);
//! assert_eq!(output.metadata.total_chars, 32);
//! ```

mod input;
mod output;

pub use input::Input;
pub use output::{Metadata, Output};

use crate::application::sentences_in;
use crate::domain::TextBuffer;
use crate::error::Result;

/// Read `input` and split it into sentences
pub fn process(input: Input) -> Result<Output> {
    let text = input.read_text()?;
    Ok(process_text(&text))
}

/// Split `text` into sentences with summary numbers
pub fn process_text(text: &str) -> Output {
    let buffer = TextBuffer::new(text);
    let sentences = sentences_in(&buffer);
    tracing::debug!(
        chars = buffer.len(),
        sentences = sentences.len(),
        "processed input"
    );
    Output::new(sentences, buffer.len())
}
