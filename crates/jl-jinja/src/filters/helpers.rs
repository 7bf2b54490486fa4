//! Small value helpers: priority names, ternary selection, list membership.

use minijinja::value::{Kwargs, Value};
use minijinja::Error;

use super::param;
use crate::error::filter_error;

/// Numeric case priorities and their display names
const PRIORITIES: &[(&str, &str)] = &[
    ("-1", "info"),
    ("40", "low"),
    ("60", "medium"),
    ("80", "high"),
    ("100", "critical"),
];

/// Map a numeric priority key to its name.
///
/// Usage: `{{ case.priority | map_priority }}`
///
/// Keys are matched as strings; anything else yields none.
pub fn map_priority(priority: Value) -> Value {
    priority
        .as_str()
        .and_then(|key| PRIORITIES.iter().find(|(k, _)| *k == key))
        .map(|(_, name)| Value::from(*name))
        .unwrap_or_else(|| Value::from(()))
}

/// Pick one of two values depending on truthiness.
///
/// Usage: `{{ alert.is_open | ternary('open', 'closed', 'unknown') }}`
///
/// `none_val` is only returned for an explicit none value, and only when it
/// was supplied and is not none itself.
pub fn ternary(
    value: Value,
    true_val: Value,
    false_val: Value,
    none_val: Option<Value>,
    kwargs: Kwargs,
) -> Result<Value, Error> {
    let none_val = param(none_val, &kwargs, "none_val")?;
    kwargs.assert_all_used()?;

    if value.is_none() {
        if let Some(none_val) = none_val.filter(|v| !v.is_none()) {
            return Ok(none_val);
        }
    }
    Ok(if value.is_true() { true_val } else { false_val })
}

/// Whether `value` is a member of `list`.
///
/// Usage: `{% if status | is_in_list(['open', 'pending']) %}`
pub fn is_in_list(value: Value, list: Value) -> Result<bool, Error> {
    let mut items = list
        .try_iter()
        .map_err(|_| filter_error(format!("is_in_list: {} is not a list", list.kind())))?;
    Ok(items.any(|item| item == value))
}

#[cfg(test)]
#[path = "helpers_test.rs"]
mod tests;
