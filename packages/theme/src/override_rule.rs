//! Conditional token overrides.

use crate::classifier::classify;
use serde::{Deserialize, Serialize};
use std::fmt;
use swatch_common::ConfigurationError;
use swatch_tokens::TokenTree;

/// Color mode an override applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKind {
    Selector,
    Breakpoint,
    ColorMode,
    MediaQuery,
}

/// The condition an override is scoped to. Two overrides target the same
/// condition only when both the kind and the discriminant value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OverrideCondition {
    /// Literal CSS selector, e.g. `.disco`
    Selector(String),
    /// Breakpoint name looked up in the theme's breakpoint table
    Breakpoint(String),
    ColorMode(ColorMode),
    /// Raw media query text, e.g. `prefers-color-scheme: dark`
    MediaQuery(String),
}

impl OverrideCondition {
    pub fn kind(&self) -> OverrideKind {
        match self {
            OverrideCondition::Selector(_) => OverrideKind::Selector,
            OverrideCondition::Breakpoint(_) => OverrideKind::Breakpoint,
            OverrideCondition::ColorMode(_) => OverrideKind::ColorMode,
            OverrideCondition::MediaQuery(_) => OverrideKind::MediaQuery,
        }
    }
}

impl fmt::Display for OverrideCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideCondition::Selector(selector) => write!(f, "selector '{}'", selector),
            OverrideCondition::Breakpoint(name) => write!(f, "breakpoint '{}'", name),
            OverrideCondition::ColorMode(mode) => write!(f, "color mode '{}'", mode),
            OverrideCondition::MediaQuery(query) => write!(f, "media query '{}'", query),
        }
    }
}

/// A set of token replacements applied under one condition.
///
/// Serialized with exactly one of `selector`, `breakpoint`, `colorMode` or
/// `mediaQuery` next to `tokens`; anything else is rejected on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OverrideFields", into = "OverrideFields")]
pub struct OverrideRule {
    condition: OverrideCondition,
    tokens: TokenTree,
}

impl OverrideRule {
    pub fn new(condition: OverrideCondition, tokens: TokenTree) -> Self {
        Self { condition, tokens }
    }

    pub fn selector(selector: impl Into<String>, tokens: TokenTree) -> Self {
        Self::new(OverrideCondition::Selector(selector.into()), tokens)
    }

    pub fn breakpoint(name: impl Into<String>, tokens: TokenTree) -> Self {
        Self::new(OverrideCondition::Breakpoint(name.into()), tokens)
    }

    pub fn color_mode(mode: ColorMode, tokens: TokenTree) -> Self {
        Self::new(OverrideCondition::ColorMode(mode), tokens)
    }

    pub fn media_query(query: impl Into<String>, tokens: TokenTree) -> Self {
        Self::new(OverrideCondition::MediaQuery(query.into()), tokens)
    }

    pub fn condition(&self) -> &OverrideCondition {
        &self.condition
    }

    pub fn kind(&self) -> OverrideKind {
        self.condition.kind()
    }

    pub fn tokens(&self) -> &TokenTree {
        &self.tokens
    }

    /// Same condition, different tokens
    pub fn with_tokens(&self, tokens: TokenTree) -> Self {
        Self::new(self.condition.clone(), tokens)
    }

    /// Whether `other` is scoped to the same kind and discriminant value
    pub fn targets_same(&self, other: &OverrideRule) -> bool {
        self.condition == other.condition
    }
}

/// Field-presence form of an override rule as it appears in theme files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OverrideFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) breakpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) color_mode: Option<ColorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) media_query: Option<String>,
    #[serde(default)]
    pub(crate) tokens: TokenTree,
}

impl TryFrom<OverrideFields> for OverrideRule {
    type Error = ConfigurationError;

    fn try_from(fields: OverrideFields) -> Result<Self, Self::Error> {
        let condition = classify(&fields)?;
        Ok(Self::new(condition, fields.tokens))
    }
}

impl From<OverrideRule> for OverrideFields {
    fn from(rule: OverrideRule) -> Self {
        let mut fields = OverrideFields {
            tokens: rule.tokens,
            ..Default::default()
        };
        match rule.condition {
            OverrideCondition::Selector(selector) => fields.selector = Some(selector),
            OverrideCondition::Breakpoint(name) => fields.breakpoint = Some(name),
            OverrideCondition::ColorMode(mode) => fields.color_mode = Some(mode),
            OverrideCondition::MediaQuery(query) => fields.media_query = Some(query),
        }
        fields
    }
}
