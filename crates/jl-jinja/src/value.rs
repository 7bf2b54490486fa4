//! Conversions between JSON documents and minijinja values.

use minijinja::value::Value;
use minijinja::Error;

use crate::error::filter_error;

/// Convert serde_json::Value to minijinja::Value, keeping map order and the
/// integer/float distinction
pub(crate) fn json_to_value(json: &serde_json::Value) -> Value {
    Value::from_serialize(json)
}

/// Convert a minijinja Value to serde_json::Value.
///
/// Undefined and none both become `null`.
pub(crate) fn value_to_json(val: &Value, filter: &str) -> Result<serde_json::Value, Error> {
    serde_json::to_value(val)
        .map_err(|e| filter_error(format!("{filter}: value is not JSON serializable: {e}")))
}

/// Text form of a value: strings as-is, everything else via Display
pub(crate) fn display_string(val: &Value) -> String {
    match val.as_str() {
        Some(s) => s.to_string(),
        None => val.to_string(),
    }
}

/// Coerce a value to an integer the way a lenient `int()` would: integers
/// as-is, floats truncated, numeric strings parsed.
pub(crate) fn coerce_int(val: &Value) -> Option<i64> {
    if let Some(s) = val.as_str() {
        return s.trim().parse::<i64>().ok();
    }
    if val.kind() != minijinja::value::ValueKind::Number {
        return None;
    }
    if let Ok(i) = i64::try_from(val.clone()) {
        return Some(i);
    }
    f64::try_from(val.clone())
        .ok()
        .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
        .map(|f| f.trunc() as i64)
}
