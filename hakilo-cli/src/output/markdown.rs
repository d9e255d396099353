//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use hakilo_core::{Output, Token};
use std::io::Write;

/// Markdown formatter - outputs sentences as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn write_document(&mut self, source: &str, output: &Output) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for (i, sentence) in output.sentences.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, sentence.text)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {}*",
            output.metadata.sentence_count
        )?;
        Ok(())
    }

    fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        for (i, token) in tokens.iter().enumerate() {
            writeln!(self.writer, "{}. `{}`", i + 1, token.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
