use clap::Parser;
use hakilo_cli::commands::{print_usage, Cli};
use hakilo_cli::CliResult;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => command.execute(),
        None => print_usage(""),
    }
}
