//! Regular-expression filters.
//!
//! All four take the pattern first and an optional `ignorecase` flag, given
//! positionally or by keyword. Non-string input is matched against its
//! display form, so `{{ 404 | regex_match('4\\d\\d') }}` works.

use minijinja::value::{Kwargs, Value};
use minijinja::Error;
use regex::{Regex, RegexBuilder};

use super::param;
use crate::error::filter_error;
use crate::value::display_string;

fn compile(filter: &str, pattern: &str, ignorecase: bool) -> Result<Regex, Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignorecase)
        .build()
        .map_err(|e| filter_error(format!("{filter}: invalid pattern '{pattern}': {e}")))
}

fn ignorecase_flag(positional: Option<bool>, kwargs: &Kwargs) -> Result<bool, Error> {
    let flag = param(positional, kwargs, "ignorecase")?.unwrap_or(false);
    kwargs.assert_all_used()?;
    Ok(flag)
}

/// Rewrite a replacement string that uses backslash group references
/// (`\1`, `\g<1>`, `\g<name>`) into the `${..}` syntax of the regex crate.
/// A literal `$` is doubled so it is not read as a reference.
pub(crate) fn translate_replacement(replacement: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '$' => out.push_str("$$"),
            '\\' => match chars.next() {
                Some(d @ '1'..='9') => {
                    let mut group = d.to_string();
                    if let Some(next) = chars.next_if(char::is_ascii_digit) {
                        group.push(next);
                    }
                    out.push_str(&format!("${{{group}}}"));
                }
                Some('g') => {
                    if chars.next() != Some('<') {
                        return Err(filter_error(
                            "regex_replace: expected '<' after \\g in replacement",
                        ));
                    }
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('>') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(filter_error(
                                    "regex_replace: unterminated group name in replacement",
                                ))
                            }
                        }
                    }
                    if name.is_empty() {
                        return Err(filter_error("regex_replace: empty group name in replacement"));
                    }
                    out.push_str(&format!("${{{name}}}"));
                }
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            other => out.push(other),
        }
    }

    Ok(out)
}

/// True when the pattern matches at the start of the value.
///
/// Usage: `{{ host | regex_match('^web-\\d+') }}`
pub fn regex_match(
    value: Value,
    pattern: &str,
    ignorecase: Option<bool>,
    kwargs: Kwargs,
) -> Result<bool, Error> {
    let re = compile("regex_match", pattern, ignorecase_flag(ignorecase, &kwargs)?)?;
    let text = display_string(&value);
    Ok(re.find(&text).is_some_and(|m| m.start() == 0))
}

/// True when the pattern matches anywhere in the value
pub fn regex_search(
    value: Value,
    pattern: &str,
    ignorecase: Option<bool>,
    kwargs: Kwargs,
) -> Result<bool, Error> {
    let re = compile("regex_search", pattern, ignorecase_flag(ignorecase, &kwargs)?)?;
    Ok(re.is_match(&display_string(&value)))
}

/// Replace every match.
///
/// Usage: `{{ path | regex_replace('/+', '/') }}`,
/// `{{ name | regex_replace('(\\w+) (\\w+)', '\\2 \\1') }}`
pub fn regex_replace(
    value: Value,
    pattern: &str,
    replacement: &str,
    ignorecase: Option<bool>,
    kwargs: Kwargs,
) -> Result<String, Error> {
    let re = compile("regex_replace", pattern, ignorecase_flag(ignorecase, &kwargs)?)?;
    let replacement = translate_replacement(replacement)?;
    Ok(re
        .replace_all(&display_string(&value), replacement.as_str())
        .into_owned())
}

/// The `result_index`-th match (negative indexes count from the end).
///
/// Without capture groups a match is the matched text; with one group it is
/// that group; with several it is the list of groups.
///
/// Usage: `{{ msg | regex_substring('user=(\\w+)') }}`
pub fn regex_substring(
    value: Value,
    pattern: &str,
    result_index: Option<i64>,
    ignorecase: Option<bool>,
    kwargs: Kwargs,
) -> Result<Value, Error> {
    let result_index = param(result_index, &kwargs, "result_index")?.unwrap_or(0);
    let re = compile(
        "regex_substring",
        pattern,
        ignorecase_flag(ignorecase, &kwargs)?,
    )?;
    let text = display_string(&value);

    let groups = re.captures_len() - 1;
    let group_text = |caps: &regex::Captures<'_>, i: usize| {
        caps.get(i).map_or("", |m| m.as_str()).to_string()
    };
    let found: Vec<Value> = re
        .captures_iter(&text)
        .map(|caps| match groups {
            0 => Value::from(group_text(&caps, 0)),
            1 => Value::from(group_text(&caps, 1)),
            n => Value::from(
                (1..=n)
                    .map(|i| group_text(&caps, i))
                    .collect::<Vec<String>>(),
            ),
        })
        .collect();

    let count = found.len() as i64;
    let index = if result_index < 0 {
        count + result_index
    } else {
        result_index
    };
    if index < 0 || index >= count {
        return Err(filter_error(format!(
            "regex_substring: index {result_index} out of range ({count} matches)"
        )));
    }
    Ok(found[index as usize].clone())
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;
