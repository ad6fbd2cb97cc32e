//! Typed argument values and SQLite-style coercions.

use std::borrow::Cow;

use rusqlite::types::ValueRef;

/// A typed SQL argument value: integer, real, text, or null.
///
/// `Text` holds raw bytes rather than a `String` because SQLite TEXT is
/// not guaranteed to be valid UTF-8, and the padding path must be able to
/// observe an invalid encoding and decline to produce a result.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(Vec<u8>),
}

impl SqlValue {
    /// Integer coercion with SQLite semantics: integers pass through,
    /// reals truncate toward zero, text parses as a leading decimal
    /// integer, null coerces to zero.
    #[must_use]
    pub fn coerce_int(&self) -> i64 {
        match self {
            Self::Null => 0,
            Self::Integer(n) => *n,
            Self::Real(v) => *v as i64,
            Self::Text(bytes) => leading_int(bytes),
        }
    }

    /// Text coercion with SQLite semantics: text passes through as bytes,
    /// numbers render as their decimal text, null has no text form.
    #[must_use]
    pub fn text_bytes(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            Self::Null => None,
            Self::Text(bytes) => Some(Cow::Borrowed(bytes)),
            Self::Integer(n) => Some(Cow::Owned(n.to_string().into_bytes())),
            Self::Real(v) => Some(Cow::Owned(format!("{v}").into_bytes())),
        }
    }

    /// Lossy string form of [`Self::text_bytes`]; null renders empty.
    #[must_use]
    pub fn text_lossy(&self) -> String {
        self.text_bytes()
            .map_or_else(String::new, |bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// JSON representation for row output.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Integer(n) => (*n).into(),
            Self::Real(v) => serde_json::json!(*v),
            Self::Text(bytes) => String::from_utf8_lossy(bytes).into_owned().into(),
        }
    }
}

impl From<ValueRef<'_>> for SqlValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(n) => Self::Integer(n),
            ValueRef::Real(v) => Self::Real(v),
            // sqlite3_value_text() hands blob bytes through unchanged.
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Self::Text(bytes.to_vec()),
        }
    }
}

/// Parse a leading decimal integer, skipping leading whitespace; anything
/// unparseable coerces to zero.
fn leading_int(bytes: &[u8]) -> i64 {
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().map_or(0, |v| sign * v)
}
