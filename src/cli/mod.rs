//! CLI argument parsing and command dispatch.

pub mod args;
pub mod money;
pub mod pad;
pub mod query;

use serde::Serialize;

pub use args::{Cli, Commands, OutputFormat};

use crate::error::Result;

/// JSON payload for a single formatted value.
#[derive(Serialize)]
struct ResultPayload<'a> {
    result: Option<&'a str>,
}

/// Print one formatting result.
///
/// Human mode prints the text verbatim (nothing at all for no-result, the
/// CLI analogue of SQL NULL); json mode always prints a `result` field.
pub(crate) fn emit_result(result: Option<&str>, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if let Some(text) = result {
                println!("{text}");
            }
        }
        OutputFormat::Json => {
            let payload = ResultPayload { result };
            let rendered = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            println!("{rendered}");
        }
    }
    Ok(())
}
