//! Split command implementation

use anyhow::Result;
use clap::Args;
use hakilo_core::{process_text, Output};
use rayon::prelude::*;
use std::path::PathBuf;

use super::{print_usage, CommonArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Text files or glob patterns
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        if self.files.is_empty() {
            return print_usage("split");
        }

        let config = CliConfig::load_or_default(self.common.config.as_deref())?;
        let format = self.common.format.unwrap_or(config.output.default_format);
        log::debug!("Arguments: {:?}", self);

        let files = match resolve_patterns(&self.files) {
            Ok(files) => files,
            Err(err) => {
                // Unknown files are reported without failing the run
                if let Some(CliError::FileNotFound(_)) = err.downcast_ref::<CliError>() {
                    eprintln!("{err}");
                    return Ok(());
                }
                return Err(err);
            }
        };
        log::info!("Splitting {} file(s)", files.len());

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(files.len() as u64);

        let results: Vec<Result<(PathBuf, Output)>> = files
            .par_iter()
            .map(|path| {
                let text = FileReader::read_text(path)?;
                let output = process_text(&text);
                progress.file_completed(&path.display().to_string());
                Ok((path.clone(), output))
            })
            .collect();
        progress.finish();

        let mut formatter = create_formatter(format, self.common.open_writer()?, &config.output);
        for result in results {
            let (path, output) = result?;
            log::info!(
                "{}: {} sentences from {} characters",
                path.display(),
                output.metadata.sentence_count,
                output.metadata.total_chars
            );
            formatter.write_document(&path.display().to_string(), &output)?;
        }
        formatter.finish()
    }
}
