//! moneyfmt - fixed-width money and text-padding functions for SQLite.
//!
//! Registers two scalar functions on a [`rusqlite::Connection`]:
//! `money(cents [, code [, direction, required]])` renders a signed cents
//! count into a fixed-column amount string, and `pad(text, width)` pads
//! UTF-8 text with trailing spaces out to a display width counted in
//! Unicode scalar values.
//!
//! Both functions degrade silently: a blank placeholder of matching
//! width for invalid amounts, SQL NULL for unpaddable text, so one bad
//! row never disturbs the columnar layout of a batch query.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod format;
pub mod logging;
pub mod sql;

pub use error::{ExitCode, MoneyfmtError, Result};
pub use format::{format_amount, pad_text};
pub use sql::register_functions;
