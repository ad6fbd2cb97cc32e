//! Scalar function registration.
//!
//! Wires the pure formatters into a [`rusqlite::Connection`] under the
//! names the original schema expects. Both closures return
//! `Ok(Option<String>)` so a formatting call never raises a SQL error:
//! invalid input resolves to the blank placeholder or to NULL, and a
//! per-row failure cannot abort the enclosing statement.

use rusqlite::Connection;
use rusqlite::functions::{Context, FunctionFlags};

use crate::error::Result;
use crate::format::{format_amount, pad_text};
use crate::sql::value::SqlValue;

/// Name the amount formatter is registered under.
pub const MONEY_FN: &str = "money";

/// Name the padder is registered under.
pub const PAD_FN: &str = "pad";

/// Register `money` (variadic) and `pad` (two arguments) on `conn`.
pub fn register_functions(conn: &Connection) -> Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    conn.create_scalar_function(MONEY_FN, -1, flags, |ctx| {
        Ok(format_amount(&collect_args(ctx)))
    })?;

    conn.create_scalar_function(PAD_FN, 2, flags, |ctx| {
        let args = collect_args(ctx);
        let width = args[1].coerce_int();
        Ok(args[0].text_bytes().and_then(|text| pad_text(&text, width)))
    })?;

    tracing::debug!(money = MONEY_FN, pad = PAD_FN, "registered scalar functions");
    Ok(())
}

fn collect_args(ctx: &Context<'_>) -> Vec<SqlValue> {
    (0..ctx.len())
        .map(|idx| SqlValue::from(ctx.get_raw(idx)))
        .collect()
}
