//! Implementation of `payord validate <file>`.
//!
//! Parses a JSON object of field values, validates it against a standard
//! schema and prints the normalized payment order to stdout. Violations and
//! the summary go to stderr.
//!
//! Flags:
//! - `--schema auto|budget|commercial` (default `auto`): `auto` picks the
//!   budget schema for budget payment types and the commercial schema
//!   otherwise. A missing or unknown payment type falls back to the budget
//!   schema, which reports it.
//!
//! Exit codes:
//! - 0 = valid
//! - 1 = at least one violation
//! - 2 = input is not a JSON object of known fields
use std::io::Write as _;
use std::time::Instant;

use payord_core::{PaymentRecord, Schema, budget_payment, commercial_payment, for_payment_type};
use tracing::debug;

use super::write_error;
use crate::error::CliError;
use crate::format::{
    FormatMode, FormatterConfig, write_summary, write_timing_human, write_violation,
};
use crate::{OutputFormat, SchemaChoice};

/// Runs the `validate` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`]: content is not a payment order.
/// - [`CliError::ValidationErrors`]: one or more violations were found.
pub fn run(
    content: &str,
    choice: SchemaChoice,
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let record: PaymentRecord =
        serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
            detail: format!("line {}, column {}: {e}", e.line(), e.column()),
        })?;

    let schema = select_schema(choice, &record);
    debug!(
        schema = schema.name(),
        fields = record.len(),
        "validating payment order"
    );

    let mode = FormatMode::from(format);
    let fmt_config = FormatterConfig::from_flags(no_color, quiet, verbose);

    let started = Instant::now();
    let outcome = schema.validate(&record);
    let elapsed = started.elapsed();

    let mut err_out = std::io::stderr().lock();

    let result = match outcome {
        Ok(normalized) => {
            let json = serde_json::to_string_pretty(&normalized).map_err(|e| {
                CliError::IoError {
                    source: "stdout".to_owned(),
                    detail: e.to_string(),
                }
            })?;
            let mut out = std::io::stdout().lock();
            writeln!(out, "{json}").map_err(write_error("stdout"))?;
            write_summary(&mut err_out, 0, mode, &fmt_config).map_err(write_error("stderr"))?;
            Ok(())
        }
        Err(err) => {
            for violation in err.violations() {
                write_violation(&mut err_out, violation, mode, &fmt_config)
                    .map_err(write_error("stderr"))?;
            }
            write_summary(&mut err_out, err.len(), mode, &fmt_config)
                .map_err(write_error("stderr"))?;
            Err(CliError::ValidationErrors { count: err.len() })
        }
    };

    if mode == FormatMode::Human {
        write_timing_human(&mut err_out, "validated", elapsed, &fmt_config)
            .map_err(write_error("stderr"))?;
    }
    result
}

/// Resolves `--schema` against the record.
fn select_schema(choice: SchemaChoice, record: &PaymentRecord) -> &'static Schema {
    match choice {
        SchemaChoice::Budget => budget_payment(),
        SchemaChoice::Commercial => commercial_payment(),
        SchemaChoice::Auto => record
            .payment_type()
            .map_or_else(budget_payment, for_payment_type),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
