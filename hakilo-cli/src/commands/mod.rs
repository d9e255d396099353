//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

pub mod split;
pub mod tokenize;

/// Divides a text into sentences, and sentences into words and punctuation
#[derive(Debug, Parser)]
#[command(name = "hakilo", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Divide text files into sentences, one sentence per line
    Split(split::SplitArgs),

    /// Divide one sentence into words and punctuation, one per line
    Tokenize(tokenize::TokenizeArgs),
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Tokenize(args) => args.execute(),
        }
    }
}

/// Options shared by every command
#[derive(Debug, Args, Default)]
pub struct CommonArgs {
    /// Output format (default: from config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "HAKILO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    /// Open the destination for formatted output
    pub fn open_writer(&self) -> Result<Box<dyn Write + Send>> {
        open_writer(self.output.as_deref())
    }
}

fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Print help for `subcommand` on stdout
pub fn print_usage(subcommand: &str) -> Result<()> {
    let mut cli = Cli::command();
    cli.build();
    match cli.find_subcommand_mut(subcommand) {
        Some(command) => command.print_help()?,
        None => cli.print_help()?,
    }
    Ok(())
}
