//! Implementation of `payord rules [--schema budget|commercial]`.
//!
//! Prints the wired rules of the standard schemas in execution order, with
//! the fields each rule consumes. Both schemas are printed when `--schema`
//! is omitted.
use std::io::Write;

use payord_core::{Field, Schema, ValidationRule, budget_payment, commercial_payment};

use super::write_error;
use crate::cli::StandardSchema;
use crate::error::CliError;
use crate::format::FormatMode;
use crate::OutputFormat;

/// Runs the `rules` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing to stdout fails.
pub fn run(schema: Option<StandardSchema>, format: OutputFormat) -> Result<(), CliError> {
    let schemas: Vec<&Schema> = match schema {
        Some(StandardSchema::Budget) => vec![budget_payment()],
        Some(StandardSchema::Commercial) => vec![commercial_payment()],
        None => vec![budget_payment(), commercial_payment()],
    };

    let mode = FormatMode::from(format);
    let mut out = std::io::stdout().lock();
    for (i, schema) in schemas.iter().enumerate() {
        match mode {
            FormatMode::Human => {
                if i > 0 {
                    writeln!(out).map_err(write_error("stdout"))?;
                }
                write_plan_human(&mut out, schema).map_err(write_error("stdout"))?;
            }
            FormatMode::Json => write_plan_json(&mut out, schema).map_err(write_error("stdout"))?,
        }
    }
    Ok(())
}

fn field_names(rule: &dyn ValidationRule) -> Vec<&'static str> {
    rule.fields().iter().copied().map(Field::name).collect()
}

/// `budget_payment (20 rules)` followed by one indented line per rule.
fn write_plan_human<W: Write>(writer: &mut W, schema: &Schema) -> std::io::Result<()> {
    let plan = schema.plan();
    writeln!(writer, "{} ({} rules)", schema.name(), plan.len())?;
    let width = plan
        .iter()
        .map(|rule| rule.id().code().len())
        .max()
        .unwrap_or(0);
    for rule in plan.iter() {
        let id = rule.id();
        writeln!(
            writer,
            "  {:<width$}  {}",
            id.code(),
            field_names(rule).join(", ")
        )?;
    }
    Ok(())
}

/// One NDJSON line per rule: `{"schema":..,"rule":..,"fields":[..]}`.
fn write_plan_json<W: Write>(writer: &mut W, schema: &Schema) -> std::io::Result<()> {
    for rule in schema.plan().iter() {
        let line = serde_json::json!({
            "schema": schema.name(),
            "rule": rule.id().code(),
            "fields": field_names(rule),
        });
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
