//! Integer and decimal format checks

use once_cell::sync::Lazy;
use regex::Regex;

// Decimal number: optional sign, digits with an optional fraction (or a bare
// fraction like ".5"), optional exponent. Rejects "inf" and "NaN".
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric pattern is valid")
});

/// Base-10 integer with an optional leading sign
pub fn is_integer(value: &str) -> bool {
    let digits = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Integer or floating point number with an optional sign
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}
