//! Output helpers shared across CLI commands.

use geovocab::service::Envelope;
use serde::Serialize;

use crate::error::CliError;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an envelope and turn a failure status into an error.
///
/// The envelope is printed either way so scripts can read the message
/// from stdout; the error only sets the exit code.
pub fn finish<T: Serialize>(envelope: Envelope<T>) -> Result<(), CliError> {
    print_json(&envelope)?;
    if envelope.is_success() {
        Ok(())
    } else {
        Err(CliError::RequestFailed {
            status: envelope.status,
            message: envelope.message,
        })
    }
}
