use chrono::Utc;
use uuid::Uuid;

/// Mints a fresh, unique record identifier.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Current wall clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent. Trailing garbage is ignored, so `"8abc"` yields `8.0` and
/// `"7.5h"` yields `7.5`. Returns `None` when no digits lead the input.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if digits > 0 || cursor > fraction_start {
            digits += cursor - fraction_start;
            end = cursor;
        }
    }

    if digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    text[..end].parse::<f64>().ok()
}
