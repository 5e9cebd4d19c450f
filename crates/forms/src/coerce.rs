//! Total conversions from an untyped response value. Unexpected shapes map to
//! the zero value of the target type.

use serde_json::Value;

/// Integer view of `value`. Floating point numbers are truncated toward zero.
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Number(num) => {
            if let Some(val) = num.as_i64() {
                val
            } else if let Some(val) = num.as_u64() {
                i64::try_from(val).unwrap_or(i64::MAX)
            } else {
                // `as` saturates and maps NaN to 0.
                num.as_f64().map(|val| val as i64).unwrap_or_default()
            }
        }
        _ => 0,
    }
}

pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(val) => *val,
        _ => false,
    }
}

pub fn to_str(value: &Value) -> &str {
    match value {
        Value::String(val) => val,
        _ => "",
    }
}
