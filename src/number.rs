//! Recognizer for the text a `${number}` hole accepts.
//!
//! A string qualifies when it is non-empty and the host language's numeric
//! conversion (unary `+`) turns it into a finite number. That conversion trims
//! surrounding whitespace, maps blank text to zero, and accepts signed decimal
//! literals or unsigned `0x`/`0o`/`0b` integer literals.
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

static NON_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap()
});

/// Whitespace and line terminators stripped by the numeric conversion.
fn is_conversion_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}' | '\u{000C}' | ' ' | '\u{00A0}' | '\u{FEFF}'
            | '\n' | '\r' | '\u{2028}' | '\u{2029}'
            | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// Numeric value of `s` under the conversion, `None` when it yields NaN.
pub fn to_number(s: &str) -> Option<f64> {
    let body = s.trim_matches(is_conversion_whitespace);
    if body.is_empty() {
        return Some(0.0);
    }
    if DECIMAL.is_match(body) {
        return body.parse::<f64>().ok();
    }
    if NON_DECIMAL.is_match(body) {
        let radix = match body.as_bytes()[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            _ => 2,
        };
        let value = body[2..]
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));
        return Some(value);
    }
    None
}

/// True when `s` is accepted by a `${number}` hole.
pub fn is_number_string(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    to_number(s).is_some_and(f64::is_finite)
}
