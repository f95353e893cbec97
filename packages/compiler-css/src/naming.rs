//! Custom property naming and token reference rewriting.
//!
//! A token at `colors.backgroundColor.primary` becomes the custom property
//! `--{prefix}-colors-background-color-primary`. Values may reference other
//! tokens as `{colors.font.primary}` or `{colors.font.primary.value}`; such
//! references are rewritten to `var(--{prefix}-colors-font-primary)`.

use heck::ToKebabCase;

/// Custom property name for a token path
pub fn property_name<S: AsRef<str>>(prefix: &str, path: &[S]) -> String {
    let mut name = format!("--{}", prefix);
    for segment in path {
        name.push('-');
        name.push_str(&segment.as_ref().to_kebab_case());
    }
    name
}

/// `var(...)` reference to a token path
pub fn var_reference<S: AsRef<str>>(prefix: &str, path: &[S]) -> String {
    format!("var({})", property_name(prefix, path))
}

/// A token value with its references rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenValue {
    pub text: String,
    /// Token paths referenced by the value, in order of appearance
    pub references: Vec<Vec<String>>,
}

/// Rewrite every `{path}` reference inside `value`.
///
/// Braces that do not enclose a dotted identifier path are left as-is.
pub fn rewrite_references(prefix: &str, value: &str) -> RewrittenValue {
    let mut text = String::with_capacity(value.len());
    let mut references = Vec::new();
    let mut rest = value;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('}') {
            Some(close) if is_reference(&after_open[..close]) => {
                let path = reference_path(&after_open[..close]);
                text.push_str(&var_reference(prefix, path.as_slice()));
                references.push(path);
                rest = &after_open[close + 1..];
            }
            _ => {
                text.push('{');
                rest = after_open;
            }
        }
    }
    text.push_str(rest);

    RewrittenValue { text, references }
}

fn is_reference(inner: &str) -> bool {
    !inner.is_empty()
        && inner.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

fn reference_path(inner: &str) -> Vec<String> {
    let mut path: Vec<String> = inner.split('.').map(str::to_string).collect();
    if path.len() > 1 && path.last().map(String::as_str) == Some("value") {
        path.pop();
    }
    path
}
