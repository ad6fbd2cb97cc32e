//! Pad command implementation.

use crate::cli::args::{OutputFormat, PadArgs};
use crate::error::Result;
use crate::format::pad_text;

/// Execute the pad command.
pub fn execute(args: &PadArgs, format: OutputFormat, pretty: bool) -> Result<()> {
    tracing::debug!(width = args.width, "padding text");

    // CLI arguments are always valid UTF-8, so this never hits the
    // invalid-encoding no-result path.
    let result = pad_text(args.text.as_bytes(), args.width);
    super::emit_result(result.as_deref(), format, pretty)
}
