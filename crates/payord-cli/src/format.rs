/// Violation formatting: human-readable and JSON (NDJSON) modes.
///
/// - **Human mode** (default): one line per violation to stderr, tagged
///   `[E]` in red. Colors are disabled when `--no-color` is set, the
///   `NO_COLOR` environment variable is present (per <https://no-color.org>),
///   or stderr is not a TTY.
/// - **JSON mode**: each violation is serialized as a single-line JSON object
///   (NDJSON) followed by a summary object.
///
/// Quiet mode suppresses the summary; verbose mode adds timing.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use payord_core::Violation;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

pub(crate) const ANSI_RED: &str = "\x1b[31m";
pub(crate) const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the violation formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress the summary and timing lines.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<crate::OutputFormat> for FormatMode {
    fn from(format: crate::OutputFormat) -> Self {
        match format {
            crate::OutputFormat::Human => Self::Human,
            crate::OutputFormat::Json => Self::Json,
        }
    }
}

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes a single [`Violation`] in human-readable format.
///
/// Format: `[E] payer-inn payer_inn: control digit mismatch (got "3664069398")`.
/// Violations raised while normalizing a field carry no rule code.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_violation_human<W: Write>(
    writer: &mut W,
    violation: &Violation,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.colors {
        writeln!(writer, "{ANSI_RED}[E]{ANSI_RESET} {violation}")
    } else {
        writeln!(writer, "[E] {violation}")
    }
}

/// Writes the summary line, e.g. `2 violations`.  Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    violations: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{violations} {}",
        pluralize(violations, "violation", "violations")
    )
}

/// Writes timing information in verbose mode; a no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

// ---------------------------------------------------------------------------
// JSON mode (NDJSON)
// ---------------------------------------------------------------------------

/// Writes a single [`Violation`] as an NDJSON line:
///
/// ```json
/// {"field":"payer_inn","kind":"checksum","value":"3664069398"}
/// ```
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_violation_json<W: Write>(writer: &mut W, violation: &Violation) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, violation)?;
    writeln!(writer)
}

/// Writes `{"summary":{"violations":N}}` as the final NDJSON line.
/// Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    violations: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(writer, r#"{{"summary":{{"violations":{violations}}}}}"#)
}

// ---------------------------------------------------------------------------
// Dispatch by format
// ---------------------------------------------------------------------------

/// Writes a single [`Violation`] in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_violation<W: Write>(
    writer: &mut W,
    violation: &Violation,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_violation_human(writer, violation, config),
        FormatMode::Json => write_violation_json(writer, violation),
    }
}

/// Writes the summary in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    violations: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_summary_human(writer, violations, config),
        FormatMode::Json => write_summary_json(writer, violations, config),
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
