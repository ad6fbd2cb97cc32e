//! moneyfmt - fixed-width money and text-padding functions for SQLite.
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use std::process::ExitCode;

use clap::Parser;

use moneyfmt::cli::{self, Cli, Commands};
use moneyfmt::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging (--log-level also reads MONEYFMT_LOG via clap)
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error[{}]: {e}", e.error_code());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> moneyfmt::Result<()> {
    let format = cli.effective_format();

    match &cli.command {
        Commands::Money(args) => cli::money::execute(args, format, cli.pretty),
        Commands::Pad(args) => cli::pad::execute(args, format, cli.pretty),
        Commands::Query(args) => cli::query::execute(args, format, cli.pretty),
    }
}
