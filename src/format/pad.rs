//! UTF-8 display-width padding.

/// Pad `text` with trailing spaces out to `width` Unicode scalar values,
/// truncating on scalar boundaries when the input is longer.
///
/// Width counts scalar values, not bytes, so multi-byte encodings are
/// never split. Returns `None` when the input bytes are not valid UTF-8.
/// The output always holds exactly `max(width, 0)` scalar values.
#[must_use]
pub fn pad_text(text: &[u8], width: i64) -> Option<String> {
    let text = std::str::from_utf8(text).ok()?;
    let width = usize::try_from(width).unwrap_or(0);

    let mut out = String::with_capacity(width.max(text.len()));
    let mut count = 0;
    for ch in text.chars().take(width) {
        out.push(ch);
        count += 1;
    }
    while count < width {
        out.push(' ');
        count += 1;
    }
    Some(out)
}
