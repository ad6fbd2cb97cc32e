//! Query command implementation.
//!
//! Opens a database, registers both scalar functions, runs one statement,
//! and prints the rows: pipe-separated columns in human mode, one JSON
//! object per row in json mode.

use std::path::Path;

use rusqlite::Connection;

use crate::cli::args::{OutputFormat, QueryArgs};
use crate::error::{MoneyfmtError, Result};
use crate::sql::{SqlValue, register_functions};

/// Execute the query command.
pub fn execute(args: &QueryArgs, format: OutputFormat, pretty: bool) -> Result<()> {
    let conn = open_database(args.db.as_deref())?;
    register_functions(&conn)?;

    tracing::debug!(sql = %args.sql, "running statement");

    let mut stmt = conn.prepare(&args.sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(ToString::to_string).collect();

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let values = (0..columns.len())
            .map(|idx| row.get_ref(idx).map(SqlValue::from))
            .collect::<rusqlite::Result<Vec<_>>>()?;

        match format {
            OutputFormat::Human => {
                let line: Vec<String> = values.iter().map(SqlValue::text_lossy).collect();
                println!("{}", line.join("|"));
            }
            OutputFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> = columns
                    .iter()
                    .cloned()
                    .zip(values.iter().map(SqlValue::to_json))
                    .collect();
                let payload = serde_json::Value::Object(object);
                let rendered = if pretty {
                    serde_json::to_string_pretty(&payload)?
                } else {
                    serde_json::to_string(&payload)?
                };
                println!("{rendered}");
            }
        }
    }

    Ok(())
}

fn open_database(path: Option<&Path>) -> Result<Connection> {
    match path {
        None => Ok(Connection::open_in_memory()?),
        Some(path) => {
            if !path.exists() {
                return Err(MoneyfmtError::DatabaseNotFound {
                    path: path.display().to_string(),
                });
            }
            Ok(Connection::open(path)?)
        }
    }
}
