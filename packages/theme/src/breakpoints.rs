//! Breakpoint table mapping breakpoint names to `min-width` thresholds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_common::ConfigurationError;

pub const DEFAULT_BREAKPOINT: &str = "base";

const DEFAULT_VALUES: [(&str, u32); 6] = [
    ("base", 0),
    ("small", 480),
    ("medium", 768),
    ("large", 992),
    ("xl", 1280),
    ("xxl", 1536),
];

/// Resolved breakpoint table, always sorted by ascending threshold (px)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoints {
    values: IndexMap<String, u32>,
    default_breakpoint: String,
}

/// Partial table supplied by a theme definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointOverrides {
    #[serde(default)]
    pub values: IndexMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_breakpoint: Option<String>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES
                .iter()
                .map(|(name, px)| (name.to_string(), *px))
                .collect(),
            default_breakpoint: DEFAULT_BREAKPOINT.to_string(),
        }
    }
}

impl Breakpoints {
    /// Overlay `overrides` on this table. Thresholds of known names are
    /// replaced, new names are added, and the result is re-sorted by
    /// threshold (ties keep table order).
    pub fn extend(&self, overrides: &BreakpointOverrides) -> Breakpoints {
        let mut values = self.values.clone();
        for (name, px) in &overrides.values {
            values.insert(name.clone(), *px);
        }
        values.sort_by(|_, a, _, b| a.cmp(b));

        Breakpoints {
            values,
            default_breakpoint: overrides
                .default_breakpoint
                .clone()
                .unwrap_or_else(|| self.default_breakpoint.clone()),
        }
    }

    /// `min-width` threshold in px for `name`
    pub fn min_width(&self, name: &str) -> Result<u32, ConfigurationError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownBreakpoint {
                name: name.to_string(),
            })
    }

    pub fn default_breakpoint(&self) -> &str {
        &self.default_breakpoint
    }

    /// Names in ascending threshold order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Check that the default breakpoint exists in the table
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.values.contains_key(&self.default_breakpoint) {
            Ok(())
        } else {
            Err(ConfigurationError::UnknownDefaultBreakpoint {
                name: self.default_breakpoint.clone(),
            })
        }
    }
}
