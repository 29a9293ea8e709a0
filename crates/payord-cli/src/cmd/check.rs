//! Implementation of `payord check <kind> <value>`.
//!
//! Runs one identifier validator. A valid value is printed in its normalized
//! form to stdout; a blank sentinel (`""` or `"0"` where allowed) prints
//! nothing. A rejected value is reported on stderr with exit code 1.
use std::io::Write as _;

use payord_core::{
    ViolationKind, validate_account, validate_bic, validate_inn, validate_kpp, validate_ogrn,
    validate_oktmo, validate_snils, validate_uin,
};
use tracing::debug;

use super::write_error;
use crate::cli::IdentifierKind;
use crate::error::CliError;
use crate::format::{ANSI_RED, ANSI_RESET, FormatMode, FormatterConfig};
use crate::OutputFormat;

/// Runs the `check` command.
///
/// # Errors
///
/// Returns [`CliError::InvalidIdentifier`] when the value is rejected.
pub fn run(
    kind: IdentifierKind,
    value: &str,
    format: OutputFormat,
    no_color: bool,
) -> Result<(), CliError> {
    let mode = FormatMode::from(format);
    let outcome = validator(kind)(value);
    debug!(kind = kind.name(), ok = outcome.is_ok(), "checked identifier");

    match outcome {
        Ok(normalized) => {
            let mut out = std::io::stdout().lock();
            match mode {
                FormatMode::Human => {
                    if let Some(normalized) = &normalized {
                        writeln!(out, "{normalized}").map_err(write_error("stdout"))?;
                    }
                }
                FormatMode::Json => {
                    let line = serde_json::json!({
                        "identifier": kind.name(),
                        "value": normalized,
                        "valid": true,
                    });
                    writeln!(out, "{line}").map_err(write_error("stdout"))?;
                }
            }
            Ok(())
        }
        Err(violation) => {
            let config = FormatterConfig::from_flags(no_color, false, false);
            let mut err_out = std::io::stderr().lock();
            match mode {
                FormatMode::Human => {
                    let tag = if config.colors {
                        format!("{ANSI_RED}[E]{ANSI_RESET}")
                    } else {
                        "[E]".to_owned()
                    };
                    writeln!(err_out, "{tag} {}: {violation}", kind.name())
                        .map_err(write_error("stderr"))?;
                }
                FormatMode::Json => {
                    let line = serde_json::json!({
                        "identifier": kind.name(),
                        "value": value,
                        "valid": false,
                        "violation": violation,
                    });
                    writeln!(err_out, "{line}").map_err(write_error("stderr"))?;
                }
            }
            Err(CliError::InvalidIdentifier {
                kind: kind.name(),
                detail: violation.to_string(),
            })
        }
    }
}

type Validator = fn(&str) -> Result<Option<String>, ViolationKind>;

fn validator(kind: IdentifierKind) -> Validator {
    match kind {
        IdentifierKind::Inn => validate_inn,
        IdentifierKind::Kpp => validate_kpp,
        IdentifierKind::Bic => validate_bic,
        IdentifierKind::Ogrn => validate_ogrn,
        IdentifierKind::Snils => validate_snils,
        IdentifierKind::Oktmo => validate_oktmo,
        IdentifierKind::Uin => validate_uin,
        IdentifierKind::Account => validate_account,
    }
}
