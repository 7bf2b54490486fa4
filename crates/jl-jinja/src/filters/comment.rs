//! The `comment` filter: decorate text as a source-code comment block.

use minijinja::value::Kwargs;
use minijinja::Error;

use super::param;
use crate::error::filter_error;

/// Decoration strings for one comment style
struct CommentStyle {
    beginning: &'static str,
    decoration: &'static str,
    end: &'static str,
}

/// Supported styles, by name
const STYLES: &[(&str, CommentStyle)] = &[
    (
        "plain",
        CommentStyle {
            beginning: "",
            decoration: "# ",
            end: "",
        },
    ),
    (
        "erlang",
        CommentStyle {
            beginning: "",
            decoration: "% ",
            end: "",
        },
    ),
    (
        "c",
        CommentStyle {
            beginning: "",
            decoration: "// ",
            end: "",
        },
    ),
    (
        "cblock",
        CommentStyle {
            beginning: "/*",
            decoration: " * ",
            end: " */",
        },
    ),
    (
        "xml",
        CommentStyle {
            beginning: "<!--",
            decoration: " - ",
            end: "-->",
        },
    ),
];

/// Fully resolved layout parameters
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CommentLayout {
    pub newline: String,
    pub beginning: String,
    pub prefix: String,
    pub prefix_count: usize,
    pub decoration: String,
    pub postfix: String,
    pub postfix_count: usize,
    pub end: String,
}

impl CommentLayout {
    /// Layout for a named style, before keyword overrides.
    ///
    /// `decoration` replaces the style's decoration and also seeds the
    /// default prefix and postfix lines.
    pub(crate) fn for_style(style: &str, decoration: Option<&str>) -> Option<Self> {
        let (_, spec) = STYLES.iter().find(|(name, _)| *name == style)?;
        let decoration = decoration.unwrap_or(spec.decoration);
        let frame = decoration.trim_end().to_string();
        Some(Self {
            newline: "\n".to_string(),
            beginning: spec.beginning.to_string(),
            prefix: frame.clone(),
            prefix_count: 1,
            decoration: decoration.to_string(),
            postfix: frame,
            postfix_count: 1,
            end: spec.end.to_string(),
        })
    }

    /// Compose the commented text
    pub(crate) fn apply(&self, text: &str) -> String {
        let nl = self.newline.as_str();
        let mut out = String::new();

        if !self.beginning.is_empty() {
            out.push_str(&self.beginning);
            out.push_str(nl);
        }

        if !self.prefix.is_empty() {
            let line = if self.prefix == self.newline {
                nl.to_string()
            } else {
                format!("{}{}", self.prefix, nl)
            };
            out.push_str(&line.repeat(self.prefix_count));
        }

        let body = if nl.is_empty() {
            format!("{}{}", self.decoration, text)
        } else {
            let decorated = format!(
                "{}{}",
                self.decoration,
                text.replace(nl, &format!("{}{}", nl, self.decoration))
            );
            // decoration-only lines lose their trailing whitespace
            decorated.replace(
                &format!("{}{}", self.decoration, nl),
                &format!("{}{}", self.decoration.trim_end(), nl),
            )
        };
        out.push_str(&body);

        for _ in 0..self.postfix_count {
            out.push_str(nl);
            out.push_str(&self.postfix);
        }

        if !self.end.is_empty() {
            out.push_str(nl);
            out.push_str(&self.end);
        }

        out
    }
}

/// Comment out text in the given style.
///
/// Usage: `{{ notes | comment('c') }}` or
/// `{{ notes | comment('cblock', prefix_count=0, postfix_count=0) }}`
///
/// Keyword overrides: `decoration`, `newline`, `beginning`, `prefix`,
/// `prefix_count`, `postfix`, `postfix_count`, `end`.
pub fn comment(text: &str, style: Option<&str>, kwargs: Kwargs) -> Result<String, Error> {
    let style = param(style, &kwargs, "style")?.unwrap_or("plain");
    let decoration: Option<&str> = kwargs.get("decoration")?;

    let mut layout = CommentLayout::for_style(style, decoration)
        .ok_or_else(|| filter_error(format!("comment: unknown style '{style}'")))?;

    if let Some(newline) = kwargs.get::<Option<&str>>("newline")? {
        layout.newline = newline.to_string();
    }
    if let Some(beginning) = kwargs.get::<Option<&str>>("beginning")? {
        layout.beginning = beginning.to_string();
    }
    if let Some(prefix) = kwargs.get::<Option<&str>>("prefix")? {
        layout.prefix = prefix.to_string();
    }
    if let Some(count) = kwargs.get::<Option<usize>>("prefix_count")? {
        layout.prefix_count = count;
    }
    if let Some(postfix) = kwargs.get::<Option<&str>>("postfix")? {
        layout.postfix = postfix.to_string();
    }
    if let Some(count) = kwargs.get::<Option<usize>>("postfix_count")? {
        layout.postfix_count = count;
    }
    if let Some(end) = kwargs.get::<Option<&str>>("end")? {
        layout.end = end.to_string();
    }
    kwargs.assert_all_used()?;

    Ok(layout.apply(text))
}

#[cfg(test)]
#[path = "comment_test.rs"]
mod tests;
