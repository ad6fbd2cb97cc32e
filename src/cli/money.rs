//! Money command implementation.

use crate::cli::args::{MoneyArgs, OutputFormat};
use crate::error::Result;
use crate::format::format_amount;
use crate::sql::SqlValue;

/// Execute the money command.
pub fn execute(args: &MoneyArgs, format: OutputFormat, pretty: bool) -> Result<()> {
    args.validate()?;

    let mut values = vec![classify_literal(&args.cents)];
    if let Some(code) = &args.code {
        values.push(SqlValue::Text(code.clone().into_bytes()));
    }
    if let (Some(direction), Some(required)) = (args.direction, args.required) {
        values.push(SqlValue::Integer(direction));
        values.push(SqlValue::Integer(required));
    }

    tracing::debug!(argc = values.len(), "formatting amount");

    let result = format_amount(&values);
    super::emit_result(result.as_deref(), format, pretty)
}

/// Type a CLI literal the way SQLite types an unquoted literal: values
/// that parse as integers bind as INTEGER, everything else passes through
/// as TEXT (and degrades to the blank placeholder downstream).
fn classify_literal(raw: &str) -> SqlValue {
    raw.trim().parse::<i64>().map_or_else(
        |_| SqlValue::Text(raw.as_bytes().to_vec()),
        SqlValue::Integer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals_bind_as_integer() {
        assert_eq!(classify_literal("12345"), SqlValue::Integer(12345));
        assert_eq!(classify_literal(" -5 "), SqlValue::Integer(-5));
    }

    #[test]
    fn other_literals_bind_as_text() {
        assert_eq!(
            classify_literal("2.5"),
            SqlValue::Text(b"2.5".to_vec())
        );
        assert_eq!(
            classify_literal("oops"),
            SqlValue::Text(b"oops".to_vec())
        );
    }
}
