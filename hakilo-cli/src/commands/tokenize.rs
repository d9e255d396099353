//! Tokenize command implementation

use anyhow::Result;
use clap::Args;
use hakilo_core::tokenize;

use super::{print_usage, CommonArgs};
use crate::config::CliConfig;
use crate::output::create_formatter;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Sentence to divide into words and punctuation
    #[arg(value_name = "SENTENCE")]
    pub sentence: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let Some(sentence) = self.sentence.as_deref() else {
            return print_usage("tokenize");
        };

        let config = CliConfig::load_or_default(self.common.config.as_deref())?;
        let format = self.common.format.unwrap_or(config.output.default_format);

        let tokens = tokenize(sentence);
        log::debug!("{} tokens", tokens.len());

        let mut formatter = create_formatter(format, self.common.open_writer()?, &config.output);
        formatter.write_tokens(&tokens)?;
        formatter.finish()
    }
}
