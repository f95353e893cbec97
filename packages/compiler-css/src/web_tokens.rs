//! Flattened view of a theme's base tokens for the component layer.

use crate::naming::{property_name, rewrite_references, var_reference};
use crate::options::EmitOptions;
use serde::Serialize;
use swatch_theme::Theme;
use swatch_tokens::leaves;

/// One leaf of a theme with its generated names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebToken {
    pub path: Vec<String>,
    /// Custom property name, e.g. `--swatch-colors-font-primary`
    pub name: String,
    /// Value as emitted, with references rewritten to `var(...)`
    pub value: String,
    /// Value as written in the theme
    pub original: String,
    /// What components use instead of the value, e.g. `var(--swatch-colors-font-primary)`
    pub reference: String,
}

pub fn web_tokens(theme: &Theme, options: &EmitOptions) -> Vec<WebToken> {
    leaves(theme.tokens())
        .into_iter()
        .map(|(path, leaf)| WebToken {
            name: property_name(&options.prefix, path.as_slice()),
            value: rewrite_references(&options.prefix, &leaf.value).text,
            original: leaf.value.clone(),
            reference: var_reference(&options.prefix, path.as_slice()),
            path,
        })
        .collect()
}
