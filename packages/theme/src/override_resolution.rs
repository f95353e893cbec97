//! Override Resolution
//!
//! Combines an inherited override list with a theme's own overrides. An own
//! override that targets the same condition as an inherited one is merged
//! into it in place; any other own override is appended.

use crate::override_rule::OverrideRule;
use swatch_tokens::merge;
use tracing::debug;

/// Resolve `own` against `parent`, returning a new list.
///
/// The result starts as `parent` in its original order. For every rule in
/// `own`, the first entry with the same kind and discriminant value gets its
/// tokens deep-merged with the rule's tokens and keeps its position;
/// otherwise the rule is appended.
pub fn resolve_overrides(parent: &[OverrideRule], own: &[OverrideRule]) -> Vec<OverrideRule> {
    let mut resolved = parent.to_vec();

    for rule in own {
        match resolved.iter().position(|existing| existing.targets_same(rule)) {
            Some(index) => {
                debug!(condition = %rule.condition(), index, "Merging override into inherited entry");
                let merged = merge(resolved[index].tokens(), rule.tokens());
                resolved[index] = resolved[index].with_tokens(merged);
            }
            None => {
                debug!(condition = %rule.condition(), index = resolved.len(), "Appending override");
                resolved.push(rule.clone());
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::override_rule::{ColorMode, OverrideCondition};
    use serde_json::json;
    use swatch_tokens::TokenTree;

    fn rule(value: serde_json::Value) -> OverrideRule {
        serde_json::from_value(value).expect("valid override rule")
    }

    #[test]
    fn test_matching_breakpoint_merges_in_place() {
        let parent = vec![rule(json!({
            "breakpoint": "small",
            "tokens": { "space": { "small": { "value": "1rem" }, "medium": { "value": "2rem" } } }
        }))];
        let own = vec![rule(json!({
            "breakpoint": "small",
            "tokens": { "space": { "medium": { "value": "3rem" }, "large": { "value": "4rem" } } }
        }))];

        let resolved = resolve_overrides(&parent, &own);

        assert_eq!(resolved.len(), 1);
        let tokens = resolved[0].tokens();
        assert_eq!(tokens.leaf("space.small").unwrap().value, "1rem");
        assert_eq!(tokens.leaf("space.medium").unwrap().value, "3rem");
        assert_eq!(tokens.leaf("space.large").unwrap().value, "4rem");
    }

    #[test]
    fn test_non_matching_breakpoint_appends() {
        let parent = vec![rule(json!({
            "breakpoint": "small",
            "tokens": { "space": { "medium": { "value": "0.5rem" } } }
        }))];
        let own = vec![rule(json!({
            "breakpoint": "large",
            "tokens": { "space": { "medium": { "value": "2.5rem" } } }
        }))];

        let resolved = resolve_overrides(&parent, &own);

        assert_eq!(resolved.len(), 2);
        assert_eq!(
            resolved[1].condition(),
            &OverrideCondition::Breakpoint("large".to_string())
        );
    }

    #[test]
    fn test_merged_entry_keeps_position() {
        let parent = vec![
            OverrideRule::selector(".disco", TokenTree::new().with_leaf("a", "1")),
            OverrideRule::breakpoint("small", TokenTree::new().with_leaf("b", "1")),
        ];
        let own = vec![
            OverrideRule::color_mode(ColorMode::Dark, TokenTree::new().with_leaf("c", "1")),
            OverrideRule::selector(".disco", TokenTree::new().with_leaf("a", "2")),
        ];

        let resolved = resolve_overrides(&parent, &own);

        let conditions: Vec<&OverrideCondition> =
            resolved.iter().map(OverrideRule::condition).collect();
        assert_eq!(
            conditions,
            vec![
                &OverrideCondition::Selector(".disco".to_string()),
                &OverrideCondition::Breakpoint("small".to_string()),
                &OverrideCondition::ColorMode(ColorMode::Dark),
            ]
        );
        assert_eq!(resolved[0].tokens().leaf("a").unwrap().value, "2");
    }

    #[test]
    fn test_different_kinds_never_match() {
        let parent = vec![OverrideRule::selector("print", TokenTree::new())];
        let own = vec![OverrideRule::media_query("print", TokenTree::new())];

        assert_eq!(resolve_overrides(&parent, &own).len(), 2);
    }

    #[test]
    fn test_duplicate_in_parent_merges_into_first() {
        let parent = vec![
            OverrideRule::selector(".a", TokenTree::new().with_leaf("x", "1")),
            OverrideRule::selector(".a", TokenTree::new().with_leaf("x", "2")),
        ];
        let own = vec![OverrideRule::selector(".a", TokenTree::new().with_leaf("y", "3"))];

        let resolved = resolve_overrides(&parent, &own);

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].tokens().leaf("y").unwrap().value, "3");
        assert!(resolved[1].tokens().leaf("y").is_none());
    }

    #[test]
    fn test_repeated_own_rules_fold_together() {
        let own = vec![
            OverrideRule::color_mode(ColorMode::Light, TokenTree::new().with_leaf("x", "1")),
            OverrideRule::color_mode(ColorMode::Light, TokenTree::new().with_leaf("y", "2")),
        ];

        let resolved = resolve_overrides(&[], &own);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].tokens().leaf_count(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(resolve_overrides(&[], &[]).is_empty());

        let parent = vec![OverrideRule::selector(".a", TokenTree::new())];
        assert_eq!(resolve_overrides(&parent, &[]), parent);
    }
}
