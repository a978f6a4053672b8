//! Lenient parsing for the free-text number fields.
//!
//! The fields accept whatever a user might paste (`€ 0,85`, `1 500 cans`).
//! Everything except ASCII digits, `.` and `,` is dropped, the first `,`
//! becomes a decimal point, and the longest leading decimal literal is read.
//! A comma is always a decimal separator: `"1,234"` is `1.234`, not 1234.

/// Parses `raw` or returns `None` when no number can be read.
///
/// | input       | result        |
/// |-------------|---------------|
/// | `""`        | `None`        |
/// | `"abc"`     | `None`        |
/// | `"."`       | `None`        |
/// | `"0,85"`    | `Some(0.85)`  |
/// | `"€1.500"`  | `Some(1.5)`   |
/// | `"1.2.3"`   | `Some(1.2)`   |
/// | `"5."`      | `Some(5.0)`   |
/// | `"-3"`      | `Some(3.0)`   |
///
/// Values too large for `f64` also yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let normalized = cleaned.replacen(',', ".", 1);

    let literal = leading_decimal(&normalized)?;
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `digits [ '.' digits ]`, with at least one digit somewhere.
fn leading_decimal(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let dot = end;
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
        // "5." reads as "5"
        if end == dot + 1 {
            end = dot;
        }
    }

    if digits == 0 {
        return None;
    }
    Some(&s[..end])
}
