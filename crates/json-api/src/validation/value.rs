//! Loose value conversions used by the field checks.
//!
//! Request values arrive as arbitrary JSON. Checks look at them either through
//! their string view (how the value prints) or through a loose numeric
//! conversion, so `"50"`, `50` and `50.0` all validate the same way.

use serde_json::{Number, Value};

/// Literal strings accepted by the boolean check.
const BOOLEAN_LITERALS: [&str; 4] = ["true", "false", "1", "0"];

/// String view of a possibly absent value.
///
/// Absent values and `null` print as the empty string, arrays join their
/// elements with commas and objects collapse to `[object Object]`.
pub(crate) fn string_view(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number_view(number),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| string_view(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Loose numeric conversion of a possibly absent value.
///
/// Absent values and objects are `NaN`, `null` is zero, booleans are one or
/// zero and strings are parsed after trimming (blank strings are zero).
pub(crate) fn loose_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Object(_)) => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => parse_number(text),
        Some(array @ Value::Array(_)) => parse_number(&string_view(Some(array))),
    }
}

/// Boolean reading of a value whose string view is `true`, `false`, `1` or `0`.
pub(crate) fn loose_bool(value: Option<&Value>) -> Option<bool> {
    match string_view(value).as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Optionally signed run of ASCII digits; leading zeroes are fine.
pub(crate) fn is_int(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);

    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Optionally signed decimal with an optional fractional part and no exponent.
pub(crate) fn is_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (integer, fraction) = unsigned.split_once('.').unwrap_or(("", unsigned));

    integer.bytes().all(|byte| byte.is_ascii_digit())
        && !fraction.is_empty()
        && fraction.bytes().all(|byte| byte.is_ascii_digit())
}

pub(crate) fn is_boolean(text: &str) -> bool {
    BOOLEAN_LITERALS.contains(&text)
}

fn number_view(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    number.as_f64().map_or_else(String::new, float_view)
}

fn float_view(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.abs() >= 1e21 || value.abs() < 1e-6 {
        return format!("{value:e}");
    }

    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    value.to_string()
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    let decimal_chars = trimmed
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'));

    if !decimal_chars {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "hexadecimal, octal and binary literals convert to the nearest double"
)]
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = text.get(2..)?;

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }

    Some(u64::from_str_radix(digits, radix).map_or(f64::INFINITY, |value| value as f64))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_string_view_of_scalars() {
        assert_eq!(string_view(None), "");
        assert_eq!(string_view(Some(&json!(null))), "");
        assert_eq!(string_view(Some(&json!(true))), "true");
        assert_eq!(string_view(Some(&json!(50))), "50");
        assert_eq!(string_view(Some(&json!(50.0))), "50");
        assert_eq!(string_view(Some(&json!(-0.0))), "0");
        assert_eq!(string_view(Some(&json!(12.75))), "12.75");
        assert_eq!(string_view(Some(&json!("Hola"))), "Hola");
    }

    #[test]
    fn test_string_view_of_containers() {
        assert_eq!(string_view(Some(&json!([1, null, "a"]))), "1,,a");
        assert_eq!(string_view(Some(&json!([]))), "");
        assert_eq!(string_view(Some(&json!({ "a": 1 }))), "[object Object]");
    }

    #[test]
    fn test_tiny_and_huge_floats_are_not_plain_decimals() {
        assert!(!is_numeric(&string_view(Some(&json!(1e-7)))));
        assert!(!is_numeric(&string_view(Some(&json!(1e300)))));
    }

    #[test]
    fn test_loose_number() {
        assert!(loose_number(None).is_nan());
        assert!(loose_number(Some(&json!({}))).is_nan());
        assert!(loose_number(Some(&json!("Hola"))).is_nan());
        assert!(loose_number(Some(&json!("1e"))).is_nan());
        assert!(loose_number(Some(&json!("0x1g"))).is_nan());

        let cases = [
            (json!(null), 0.0),
            (json!(true), 1.0),
            (json!(false), 0.0),
            (json!(50), 50.0),
            (json!(" 12.5 "), 12.5),
            (json!(""), 0.0),
            (json!("+3"), 3.0),
            (json!("1e3"), 1000.0),
            (json!("0x1A"), 26.0),
            (json!("0b101"), 5.0),
            (json!([7]), 7.0),
            (json!([]), 0.0),
        ];

        for (value, expected) in cases {
            let actual = loose_number(Some(&value));

            assert!(
                (actual - expected).abs() < f64::EPSILON,
                "{value} should convert to {expected}, got {actual}"
            );
        }

        assert!(loose_number(Some(&json!([1, 2]))).is_nan());
        assert!(loose_number(Some(&json!("Infinity"))).is_infinite());
    }

    #[test]
    fn test_loose_bool() {
        assert_eq!(loose_bool(Some(&json!(true))), Some(true));
        assert_eq!(loose_bool(Some(&json!("false"))), Some(false));
        assert_eq!(loose_bool(Some(&json!(1))), Some(true));
        assert_eq!(loose_bool(Some(&json!("0"))), Some(false));
        assert_eq!(loose_bool(Some(&json!("yes"))), None);
        assert_eq!(loose_bool(None), None);
    }

    #[test]
    fn test_is_int() {
        for valid in ["1", "007", "-5", "+42"] {
            assert!(is_int(valid), "{valid} should be an integer");
        }

        for invalid in ["", "+", "invalid-id", "1.0", "1e3", " 1"] {
            assert!(!is_int(invalid), "{invalid} should not be an integer");
        }
    }

    #[test]
    fn test_is_numeric() {
        for valid in ["0", "50", "-1.5", ".5", "+0.25"] {
            assert!(is_numeric(valid), "{valid} should be numeric");
        }

        for invalid in ["", "5.", "1.2.3", "1e5", "Hola", "-", "1,5"] {
            assert!(!is_numeric(invalid), "{invalid} should not be numeric");
        }
    }

    #[test]
    fn test_is_boolean() {
        assert!(is_boolean("true"));
        assert!(is_boolean("0"));
        assert!(!is_boolean("TRUE"));
        assert!(!is_boolean(""));
    }
}
