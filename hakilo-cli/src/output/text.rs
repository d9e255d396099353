//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use hakilo_core::{Output, Token};
use std::io::Write;

/// Plain text formatter - one sentence or token per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_summary: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_summary: bool) -> Self {
        Self {
            writer,
            show_summary,
        }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn write_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        for sentence in &output.sentences {
            writeln!(self.writer, "{}", sentence.text)?;
        }
        if self.show_summary {
            writeln!(
                self.writer,
                "Original size of file: {}",
                output.metadata.total_chars
            )?;
            writeln!(
                self.writer,
                "Number of sentences: {}",
                output.metadata.sentence_count
            )?;
        }
        Ok(())
    }

    fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        for token in tokens {
            writeln!(self.writer, "{}", token.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
