mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin, SchemaChoice};

/// Installs the stderr log subscriber.
///
/// `PAYORD_LOG` takes an `EnvFilter` directive; without it the level follows
/// `--quiet` / `--verbose`.
fn init_logging(quiet: bool, verbose: bool) {
    let fallback = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("PAYORD_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), error::CliError> {
    match &cli.command {
        Command::Validate { file, schema } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::validate::run(
                &content,
                *schema,
                cli.format,
                cli.quiet,
                cli.verbose,
                cli.no_color,
            )
        }
        Command::Check { kind, value } => {
            cmd::check::run(*kind, value, cli.format, cli.no_color)
        }
        Command::Rules { schema } => cmd::rules::run(*schema, cli.format),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(&cli) {
        if !e.already_reported() {
            eprintln!("{e}");
        }
        std::process::exit(e.exit_code());
    }
}
