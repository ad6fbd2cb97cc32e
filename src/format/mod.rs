//! Pure formatting core.
//!
//! Two stateless routines invoked per result row: fixed-width amount
//! rendering ([`format_amount`]) and UTF-8 display-width padding
//! ([`pad_text`]). Neither touches shared state; both are plain functions
//! from an argument tuple to a text result.

pub mod amount;
pub mod pad;

pub use amount::{AMOUNT_WIDTH, CODE_WIDTH, blank, format_amount};
pub use pad::pad_text;
