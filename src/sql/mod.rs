//! SQL call contract.
//!
//! The formatting core receives an ordered list of typed argument values
//! ([`SqlValue`]) and returns one text value or no result. This module
//! defines that value model and wires both formatters into a rusqlite
//! connection as scalar functions.

pub mod register;
pub mod value;

pub use register::{MONEY_FN, PAD_FN, register_functions};
pub use value::SqlValue;
