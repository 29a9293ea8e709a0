/// Command module for the `payord` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod check;
pub mod rules;
pub mod validate;

use crate::error::CliError;

/// Wraps a failed write to an output stream.
pub(crate) fn write_error(stream: &str) -> impl Fn(std::io::Error) -> CliError + '_ {
    move |e| CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}
