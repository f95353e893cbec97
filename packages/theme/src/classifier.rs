//! Override classification.
//!
//! `classify` is the only place that inspects discriminant fields; once a
//! rule is constructed its kind is carried by [`OverrideCondition`].

use crate::override_rule::{OverrideCondition, OverrideFields, OverrideKind, OverrideRule};
use swatch_common::ConfigurationError;

pub fn is_selector_override(rule: &OverrideRule) -> bool {
    rule.kind() == OverrideKind::Selector
}

pub fn is_breakpoint_override(rule: &OverrideRule) -> bool {
    rule.kind() == OverrideKind::Breakpoint
}

pub fn is_color_mode_override(rule: &OverrideRule) -> bool {
    rule.kind() == OverrideKind::ColorMode
}

pub fn is_media_query_override(rule: &OverrideRule) -> bool {
    rule.kind() == OverrideKind::MediaQuery
}

/// Turn the field-presence form into a condition. Exactly one field must be set.
pub(crate) fn classify(fields: &OverrideFields) -> Result<OverrideCondition, ConfigurationError> {
    let mut present = Vec::new();
    let mut condition = None;

    if let Some(selector) = &fields.selector {
        present.push("selector");
        condition = Some(OverrideCondition::Selector(selector.clone()));
    }
    if let Some(name) = &fields.breakpoint {
        present.push("breakpoint");
        condition = Some(OverrideCondition::Breakpoint(name.clone()));
    }
    if let Some(mode) = fields.color_mode {
        present.push("colorMode");
        condition = Some(OverrideCondition::ColorMode(mode));
    }
    if let Some(query) = &fields.media_query {
        present.push("mediaQuery");
        condition = Some(OverrideCondition::MediaQuery(query.clone()));
    }

    match (present.len(), condition) {
        (1, Some(condition)) => Ok(condition),
        (0, _) => Err(ConfigurationError::MissingDiscriminant),
        _ => Err(ConfigurationError::ConflictingDiscriminants { fields: present }),
    }
}
