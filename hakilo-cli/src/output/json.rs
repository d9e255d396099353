//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use hakilo_core::{Output, Token};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects documents and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
    tokens: Option<Vec<Token>>,
}

/// Sentences of one input
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// Code points in the input
    pub total_chars: usize,
    /// Number of sentences
    pub sentence_count: usize,
    /// The sentences
    pub sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// The sentence text
    pub text: String,
    /// Code-point offset in the original text
    pub offset: usize,
    /// Length of the sentence in code points
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
            tokens: None,
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn write_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            total_chars: output.metadata.total_chars,
            sentence_count: output.metadata.sentence_count,
            sentences: output
                .sentences
                .iter()
                .map(|s| SentenceData {
                    text: s.text.clone(),
                    offset: s.offset,
                    length: s.char_len(),
                })
                .collect(),
        });
        Ok(())
    }

    fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        self.tokens
            .get_or_insert_with(Vec::new)
            .extend_from_slice(tokens);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(tokens) = self.tokens.take() {
            self.write_value(&tokens)?;
        }
        if !self.documents.is_empty() {
            let documents = std::mem::take(&mut self.documents);
            self.write_value(&documents)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
