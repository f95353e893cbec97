//! Theme definitions and the theme builder.

use crate::breakpoints::{BreakpointOverrides, Breakpoints};
use crate::override_resolution::resolve_overrides;
use crate::override_rule::{OverrideKind, OverrideRule};
use serde::{Deserialize, Serialize};
use swatch_common::ConfigurationError;
use swatch_tokens::{merge, TokenLeaf, TokenTree};
use tracing::{debug, instrument};

/// Input for building a [`Theme`].
///
/// `extends` names the parent theme file and is only followed by
/// [`crate::ThemeLoader`]; [`Theme::build`] takes the parent explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    pub name: String,

    #[serde(default)]
    pub tokens: TokenTree,

    #[serde(default)]
    pub overrides: Vec<OverrideRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<BreakpointOverrides>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
}

impl ThemeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tokens(mut self, tokens: TokenTree) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_override(mut self, rule: OverrideRule) -> Self {
        self.overrides.push(rule);
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: BreakpointOverrides) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    /// The name doubles as a stylesheet file stem, so it must be non-empty
    /// and free of path separators.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.trim().is_empty() {
            return Err(ConfigurationError::EmptyThemeName);
        }
        if self.name.contains(['/', '\\']) {
            return Err(ConfigurationError::InvalidThemeName {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A fully resolved theme. Immutable once built; extending produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    name: String,
    tokens: TokenTree,
    overrides: Vec<OverrideRule>,
    breakpoints: Breakpoints,
}

impl Theme {
    /// Build a standalone theme
    pub fn new(definition: ThemeDefinition) -> Self {
        Self::build(definition, None)
    }

    /// Build `own` on top of an optional parent.
    ///
    /// Tokens are deep-merged over the parent's tokens, overrides are resolved
    /// against the parent's overrides and breakpoints overlay the parent's
    /// table. The parent's name is never inherited.
    #[instrument(skip_all, fields(theme = %own.name, overrides = own.overrides.len()))]
    pub fn build(own: ThemeDefinition, parent: Option<&Theme>) -> Self {
        let (tokens, overrides, breakpoints) = match parent {
            Some(parent) => {
                debug!(parent = %parent.name, "Extending parent theme");
                (
                    merge(&parent.tokens, &own.tokens),
                    resolve_overrides(&parent.overrides, &own.overrides),
                    parent.breakpoints.clone(),
                )
            }
            None => (
                own.tokens,
                resolve_overrides(&[], &own.overrides),
                Breakpoints::default(),
            ),
        };

        let breakpoints = match &own.breakpoints {
            Some(overrides) => breakpoints.extend(overrides),
            None => breakpoints,
        };

        debug!(
            tokens = tokens.leaf_count(),
            overrides = overrides.len(),
            "Theme built"
        );

        Theme {
            name: own.name,
            tokens,
            overrides,
            breakpoints,
        }
    }

    /// Build a child theme that inherits from `self`
    pub fn extend(&self, definition: ThemeDefinition) -> Theme {
        Theme::build(definition, Some(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &TokenTree {
        &self.tokens
    }

    /// Resolved overrides: inherited entries first, then newly introduced ones
    pub fn overrides(&self) -> &[OverrideRule] {
        &self.overrides
    }

    /// Resolved overrides of one kind, in resolved order
    pub fn overrides_of(&self, kind: OverrideKind) -> impl Iterator<Item = &OverrideRule> {
        self.overrides.iter().filter(move |rule| rule.kind() == kind)
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Base token at a dotted path, e.g. `colors.font.primary`
    pub fn token(&self, path: &str) -> Option<&TokenLeaf> {
        self.tokens.leaf(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::override_rule::ColorMode;
    use serde_json::json;

    fn definition(value: serde_json::Value) -> ThemeDefinition {
        serde_json::from_value(value).expect("valid theme definition")
    }

    #[test]
    fn test_standalone_theme_equals_empty_parent() {
        let own = definition(json!({
            "name": "solo",
            "tokens": { "colors": { "primary": { "value": "teal" } } },
            "overrides": [{ "selector": ".disco", "tokens": {} }]
        }));
        let empty_parent = Theme::new(ThemeDefinition::new("empty"));

        let standalone = Theme::new(own.clone());
        let extended = Theme::build(own, Some(&empty_parent));

        assert_eq!(standalone, extended);
    }

    #[test]
    fn test_name_is_not_inherited() {
        let parent = Theme::new(ThemeDefinition::new("parent"));
        let child = parent.extend(ThemeDefinition::new("child"));
        assert_eq!(child.name(), "child");
    }

    #[test]
    fn test_tokens_deep_merge_over_parent() {
        let parent = Theme::new(definition(json!({
            "name": "parent",
            "tokens": {
                "colors": {
                    "font": { "primary": { "value": "black" } },
                    "background": { "primary": { "value": "white" } }
                }
            }
        })));
        let child = parent.extend(definition(json!({
            "name": "child",
            "tokens": { "colors": { "font": { "primary": { "value": "navy" } } } }
        })));

        assert_eq!(child.token("colors.font.primary").unwrap().value, "navy");
        assert_eq!(child.token("colors.background.primary").unwrap().value, "white");
        // Parent is untouched
        assert_eq!(parent.token("colors.font.primary").unwrap().value, "black");
    }

    #[test]
    fn test_overrides_of_kind_keeps_resolved_order() {
        let theme = Theme::new(definition(json!({
            "name": "ordered",
            "overrides": [
                { "breakpoint": "large", "tokens": {} },
                { "selector": ".a", "tokens": {} },
                { "breakpoint": "small", "tokens": {} }
            ]
        })));

        let names: Vec<String> = theme
            .overrides_of(OverrideKind::Breakpoint)
            .map(|rule| rule.condition().to_string())
            .collect();
        assert_eq!(names, vec!["breakpoint 'large'", "breakpoint 'small'"]);
        assert_eq!(theme.overrides_of(OverrideKind::ColorMode).count(), 0);
    }

    #[test]
    fn test_own_duplicate_overrides_fold_without_parent() {
        let theme = Theme::new(
            ThemeDefinition::new("dupes")
                .with_override(OverrideRule::color_mode(
                    ColorMode::Dark,
                    TokenTree::new().with_leaf("a", "1"),
                ))
                .with_override(OverrideRule::color_mode(
                    ColorMode::Dark,
                    TokenTree::new().with_leaf("b", "2"),
                )),
        );

        assert_eq!(theme.overrides().len(), 1);
    }

    #[test]
    fn test_breakpoints_overlay_parent_table() {
        let parent = Theme::new(definition(json!({
            "name": "parent",
            "breakpoints": { "values": { "small": 500 } }
        })));
        let child = parent.extend(definition(json!({
            "name": "child",
            "breakpoints": { "values": { "large": 1000 } }
        })));

        assert_eq!(child.breakpoints().min_width("small"), Ok(500));
        assert_eq!(child.breakpoints().min_width("large"), Ok(1000));
        assert_eq!(child.breakpoints().min_width("medium"), Ok(768));
    }

    #[test]
    fn test_empty_name_fails_validation() {
        assert_eq!(
            ThemeDefinition::new("  ").validate(),
            Err(ConfigurationError::EmptyThemeName)
        );
        assert!(ThemeDefinition::new("ok").validate().is_ok());
    }

    #[test]
    fn test_name_with_path_separator_fails_validation() {
        for name in ["../escape", "nested/theme", "windows\\theme"] {
            assert_eq!(
                ThemeDefinition::new(name).validate(),
                Err(ConfigurationError::InvalidThemeName {
                    name: name.to_string()
                })
            );
        }
        assert!(ThemeDefinition::new("dark.brand-2").validate().is_ok());
    }
}
