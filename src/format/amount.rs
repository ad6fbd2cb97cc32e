//! Cents-to-text amount formatting.
//!
//! Renders a signed cents count into a fixed-column decimal field so that
//! amounts line up when formatted across many rows. Invalid input degrades
//! to a blank placeholder of the same width instead of raising an error,
//! so one bad row never breaks the columnar layout of a batch query.

use crate::sql::SqlValue;

/// Width of the amount field: 7-wide right-justified dollars, the decimal
/// point, and 2 zero-padded penny digits.
pub const AMOUNT_WIDTH: usize = 10;

/// Width of the appended currency-code field.
pub const CODE_WIDTH: usize = 4;

/// Column overwritten with `-` when truncating division loses the sign.
const SIGN_COLUMN: usize = 5;

/// Format a cents amount from an ordered argument list.
///
/// Argument shape: `[cents]`, `[cents, code]`, or
/// `[cents, code, direction, required]`.
///
/// Returns `None` for an empty invocation. Returns the blank placeholder
/// when the first argument is not an integer, or when the four-argument
/// form carries unequal guard values. Otherwise returns the rendered
/// amount, with the currency field appended whenever a second argument
/// is present.
#[must_use]
pub fn format_amount(args: &[SqlValue]) -> Option<String> {
    if args.is_empty() {
        return None;
    }

    // Guard values participate only in the exact four-argument form.
    let (direction, required) = if args.len() == 4 {
        (args[2].coerce_int(), args[3].coerce_int())
    } else {
        (0, 0)
    };

    let cents = match args[0] {
        SqlValue::Integer(n) if direction == required => n,
        _ => return Some(blank(args.len())),
    };

    let dollars = cents / 100;
    let mut pennies = cents % 100;
    if cents < 0 {
        pennies = -pennies;
    }

    let mut out = String::with_capacity(AMOUNT_WIDTH + CODE_WIDTH);
    out.push_str(&format!("{dollars:7}.{pennies:02}"));

    // A small negative amount divides down to zero dollars, and zero
    // renders without the sign the original cents value carried.
    if cents < 0 && dollars == 0 {
        out.replace_range(SIGN_COLUMN..=SIGN_COLUMN, "-");
    }

    if args.len() >= 2 {
        let code = args[1].text_lossy();
        out.push_str(&format!("{code:>CODE_WIDTH$}"));
    }

    Some(out)
}

/// Blank placeholder preserving column alignment: [`AMOUNT_WIDTH`] spaces
/// for a one-argument call, amount plus code width otherwise.
#[must_use]
pub fn blank(argc: usize) -> String {
    let width = if argc == 1 {
        AMOUNT_WIDTH
    } else {
        AMOUNT_WIDTH + CODE_WIDTH
    };
    " ".repeat(width)
}
