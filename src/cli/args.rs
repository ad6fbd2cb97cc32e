//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{MoneyfmtError, Result};

/// Fixed-width money and text-padding functions for SQLite.
#[derive(Parser, Debug)]
#[command(name = "moneyfmt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // === Global flags ===
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", env = "MONEYFMT_LOG", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective output format.
    #[must_use]
    pub const fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Human,
    /// JSON output
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a cents amount as a fixed-width string
    Money(MoneyArgs),

    /// Pad text with trailing spaces to a display width
    Pad(PadArgs),

    /// Run a SQL statement with money() and pad() registered
    Query(QueryArgs),
}

/// Arguments for the `money` command.
#[derive(Parser, Debug)]
pub struct MoneyArgs {
    /// Cents amount; non-integer input degrades to the blank placeholder
    #[arg(allow_negative_numbers = true)]
    pub cents: String,

    /// Currency code appended as a 4-column field
    pub code: Option<String>,

    /// Guard value compared against --required
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub direction: Option<i64>,

    /// Guard value compared against --direction
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub required: Option<i64>,
}

impl MoneyArgs {
    /// Validate argument combinations.
    pub fn validate(&self) -> Result<()> {
        if self.direction.is_some() != self.required.is_some() {
            return Err(MoneyfmtError::InvalidArgument {
                flag: "--direction/--required".to_string(),
                message: "guard flags must be supplied together".to_string(),
            });
        }

        // The four-argument form puts the guard pair in slots 3 and 4;
        // without a code there is no such form.
        if self.direction.is_some() && self.code.is_none() {
            return Err(MoneyfmtError::InvalidArgument {
                flag: "--direction/--required".to_string(),
                message: "guard flags require a currency code".to_string(),
            });
        }

        Ok(())
    }
}

/// Arguments for the `pad` command.
#[derive(Parser, Debug)]
pub struct PadArgs {
    /// Text to pad or truncate
    pub text: String,

    /// Target width in Unicode scalar values
    #[arg(allow_negative_numbers = true)]
    pub width: i64,
}

/// Arguments for the `query` command.
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Database file (in-memory when omitted)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// SQL statement to run
    pub sql: String,
}
