/// Parses an integer literal permissively.
///
/// Accepts the standard base prefixes `0x`, `0o` and `0b` (upper or
/// lower case) and single `_` separators between digits. The lexer's
/// character class keeps prefixed forms from ever being produced by a
/// plain scan, but the parser itself honors them so programmatically
/// assembled literals behave like standard integer syntax.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal is malformed or out of range.
///
/// # Example
/// ```
/// use predica::util::num::parse_int_literal;
///
/// assert_eq!(parse_int_literal("42"), Some(42));
/// assert_eq!(parse_int_literal("1_000"), Some(1000));
/// assert_eq!(parse_int_literal("0xff"), Some(255));
/// assert_eq!(parse_int_literal("1__0"), None);
/// ```
#[must_use]
pub fn parse_int_literal(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x" | "0X") => (&literal[2..], 16),
        Some("0o" | "0O") => (&literal[2..], 8),
        Some("0b" | "0B") => (&literal[2..], 2),
        _ => (literal, 10),
    };

    let digits = strip_separators(digits)?;
    i64::from_str_radix(&digits, radix).ok()
}

/// Parses a float literal permissively.
///
/// Accepts single `_` separators between digits on either side of the
/// decimal point.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the literal is malformed.
#[must_use]
pub fn parse_float_literal(literal: &str) -> Option<f64> {
    let cleaned = match literal.split_once('.') {
        Some((int_part, frac_part)) => {
            let int_part = if int_part.is_empty() {
                String::new()
            } else {
                strip_separators(int_part)?
            };
            let frac_part = if frac_part.is_empty() {
                String::new()
            } else {
                strip_separators(frac_part)?
            };
            format!("{int_part}.{frac_part}")
        },
        None => strip_separators(literal)?,
    };

    cleaned.parse().ok()
}

/// Removes `_` separators after validating their placement: none
/// leading, none trailing, none doubled.
fn strip_separators(digits: &str) -> Option<String> {
    if digits.is_empty()
       || digits.starts_with('_')
       || digits.ends_with('_')
       || digits.contains("__")
    {
        return None;
    }
    Some(digits.chars().filter(|&c| c != '_').collect())
}
