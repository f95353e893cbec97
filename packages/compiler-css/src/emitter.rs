use crate::css_document::{CssRule, Declaration, VirtualCssDocument};
use crate::naming::{property_name, rewrite_references};
use crate::options::EmitOptions;
use swatch_common::ConfigurationError;
use swatch_theme::{OverrideCondition, OverrideRule, Theme};
use swatch_tokens::{TokenLeaf, TokenNode, TokenTree, TokenVisitor};
use tracing::{debug, info, instrument};

pub type CssResult<T> = Result<T, ConfigurationError>;

/// Stylesheet emitter - turns a built theme into scoped CSS rules
#[derive(Debug, Clone, Default)]
pub struct ThemeEmitter {
    options: EmitOptions,
}

impl ThemeEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Evaluate a theme to CSS rules.
    ///
    /// The base rule comes first, followed by the rules of every override in
    /// resolved order. Later rules of equal specificity win, so this order is
    /// part of the output contract.
    #[instrument(skip_all, fields(theme = %theme.name(), overrides = theme.overrides().len()))]
    pub fn evaluate(&self, theme: &Theme) -> CssResult<VirtualCssDocument> {
        info!("Starting stylesheet emission");

        if theme.name().trim().is_empty() {
            return Err(ConfigurationError::EmptyThemeName);
        }
        theme.breakpoints().validate()?;

        let theme_selector = self.options.theme_selector(theme.name());
        let mut css_doc = VirtualCssDocument::new();

        css_doc.add_rule(CssRule::new(
            theme_selector.clone(),
            self.declarations(theme, theme.tokens())?,
        ));

        for rule in theme.overrides() {
            debug!(condition = %rule.condition(), "Emitting override");
            for css_rule in self.override_rules(theme, &theme_selector, rule)? {
                css_doc.add_rule(css_rule);
            }
        }

        info!(rules = css_doc.rules.len(), "Stylesheet emission complete");
        Ok(css_doc)
    }

    /// Evaluate a theme straight to CSS text
    pub fn emit(&self, theme: &Theme) -> CssResult<String> {
        Ok(self.evaluate(theme)?.to_css())
    }

    fn override_rules(
        &self,
        theme: &Theme,
        theme_selector: &str,
        rule: &OverrideRule,
    ) -> CssResult<Vec<CssRule>> {
        let declarations = self.declarations(theme, rule.tokens())?;

        let rules = match rule.condition() {
            OverrideCondition::Selector(selector) => {
                vec![CssRule::new(selector.clone(), declarations)]
            }
            OverrideCondition::Breakpoint(name) => {
                let min_width = theme.breakpoints().min_width(name)?;
                vec![CssRule::new(theme_selector, declarations)
                    .within_media(format!("(min-width: {}px)", min_width))]
            }
            OverrideCondition::ColorMode(mode) => {
                // The mode applies when chosen explicitly, or when the
                // mounted mode is `system` and the OS preference matches.
                let attribute = self.options.color_mode_attribute();
                vec![
                    CssRule::new(
                        format!("{}[{}=\"system\"]", theme_selector, attribute),
                        declarations.clone(),
                    )
                    .within_media(format!("(prefers-color-scheme: {})", mode)),
                    CssRule::new(
                        format!("{}[{}=\"{}\"]", theme_selector, attribute, mode),
                        declarations,
                    ),
                ]
            }
            OverrideCondition::MediaQuery(query) => {
                vec![CssRule::new(theme_selector, declarations).within_media(media_condition(query))]
            }
        };

        Ok(rules)
    }

    fn declarations(&self, theme: &Theme, tokens: &TokenTree) -> CssResult<Vec<Declaration>> {
        let mut collector = DeclarationCollector {
            options: &self.options,
            known: theme.tokens(),
            declarations: Vec::with_capacity(tokens.leaf_count()),
            error: None,
        };
        collector.visit_branch(&mut Vec::new(), tokens);

        match collector.error {
            Some(err) => Err(err),
            None => Ok(collector.declarations),
        }
    }
}

/// Bare media features such as `prefers-color-scheme: dark` get wrapped in
/// parentheses; anything else is used verbatim.
fn media_condition(query: &str) -> String {
    let query = query.trim();
    if query.contains(':') && !query.contains('(') {
        format!("({})", query)
    } else {
        query.to_string()
    }
}

struct DeclarationCollector<'a> {
    options: &'a EmitOptions,
    known: &'a TokenTree,
    declarations: Vec<Declaration>,
    error: Option<ConfigurationError>,
}

impl TokenVisitor for DeclarationCollector<'_> {
    fn visit_leaf(&mut self, path: &[String], leaf: &TokenLeaf) {
        if self.error.is_some() {
            return;
        }

        let rewritten = rewrite_references(&self.options.prefix, &leaf.value);

        if self.options.strict_references {
            let missing = rewritten.references.iter().find(|reference| {
                self.known
                    .lookup(reference.as_slice())
                    .and_then(TokenNode::as_leaf)
                    .is_none()
            });
            if let Some(reference) = missing {
                self.error = Some(ConfigurationError::UnresolvedReference {
                    reference: reference.join("."),
                });
                return;
            }
        }

        self.declarations.push(Declaration {
            property: property_name(&self.options.prefix, path),
            value: rewritten.text,
        });
    }
}
