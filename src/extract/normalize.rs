// src/extract/normalize.rs

/// Placeholder written into the output whenever a field is missing or
/// carries no usable value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Reduces a raw price string ("$ 350,000", "COP 1.578.000") to bare digits.
/// Currency marks, separators and whitespace are dropped; a value with no
/// digits at all degrades to the sentinel.
pub fn normalize_price(raw: Option<&str>) -> String {
    digits_or_sentinel(raw)
}

/// Same digit-retention rule for counted fields (rooms, bathrooms, area).
pub fn normalize_number(raw: Option<&str>) -> String {
    digits_or_sentinel(raw)
}

fn digits_or_sentinel(raw: Option<&str>) -> String {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        digits
    }
}
