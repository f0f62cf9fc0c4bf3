//! Rendering of command results to stdout.

use std::io::Write;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

/// Write a command result in the requested format.
pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            writeln!(handle, "{rendered}")?;
        }
        OutputFormat::Text => {
            for line in &result.text {
                writeln!(handle, "{line}")?;
            }
        }
    }

    Ok(())
}
