//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits colored lines to stderr and plain text to stdout.  `Json`
/// emits NDJSON for violations and a single object for data.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// Schema selection for `validate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaChoice {
    /// Budget schema for budget payment types, commercial schema otherwise.
    Auto,
    /// Every field of a payment order.
    Budget,
    /// A payment order without the budget fields.
    Commercial,
}

/// One of the standard schemas, for `rules`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StandardSchema {
    /// Every field of a payment order.
    Budget,
    /// A payment order without the budget fields.
    Commercial,
}

/// Identifier kinds accepted by `check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdentifierKind {
    /// Taxpayer identification number (5, 10 or 12 digits).
    Inn,
    /// Tax registration reason code (9 characters).
    Kpp,
    /// Bank identifier code (9 digits).
    Bic,
    /// State registration number (13 or 15 digits).
    Ogrn,
    /// Individual insurance account number (11 digits).
    Snils,
    /// Municipal territory code (8 or 11 digits).
    Oktmo,
    /// Unique accrual identifier (4, 20 or 25 digits).
    Uin,
    /// Bank account number (20 digits).
    Account,
}

impl IdentifierKind {
    /// Lowercase name, as typed on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inn => "inn",
            Self::Kpp => "kpp",
            Self::Bic => "bic",
            Self::Ogrn => "ogrn",
            Self::Snils => "snils",
            Self::Oktmo => "oktmo",
            Self::Uin => "uin",
            Self::Account => "account",
        }
    }
}

/// All top-level subcommands exposed by the `payord` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a payment order given as a JSON object of field values.
    Validate {
        /// Path to a JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Schema to validate against: auto (default), budget or commercial.
        #[arg(long, default_value = "auto", value_enum)]
        schema: SchemaChoice,
    },

    /// Validate a single identifier and print its normalized form.
    Check {
        /// Identifier kind.
        #[arg(value_name = "KIND", value_enum)]
        kind: IdentifierKind,
        /// The value to check.
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// Print the rule plan of a standard schema.
    Rules {
        /// Schema to describe; both are printed when omitted.
        #[arg(long, value_enum)]
        schema: Option<StandardSchema>,
    },
}

/// Root CLI struct for the `payord` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "payord",
    version,
    about = "Payment order validator",
    long_about = "Validates Russian bank payment orders: identifier checksums,\n\
                  per-field formats and the cross-field rules that depend on\n\
                  the payment type and payer status."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and debug logging
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `PAYORD_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 1048576 (1 MiB).
    #[arg(
        long,
        global = true,
        env = "PAYORD_MAX_FILE_SIZE",
        default_value = "1048576"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
