/// CSS declaration: custom property and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// CSS rule with selector, ordered declarations and an optional media condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
    /// Condition text placed after `@media`, e.g. `(min-width: 480px)`
    pub media_query: Option<String>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
            media_query: None,
        }
    }

    pub fn within_media(mut self, media_query: impl Into<String>) -> Self {
        self.media_query = Some(media_query.into());
        self
    }

    fn write_block(&self, css: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);

        css.push_str(&indent);
        css.push_str(&self.selector);
        css.push_str(" {\n");

        for declaration in &self.declarations {
            css.push_str(&indent);
            css.push_str("  ");
            css.push_str(&declaration.property);
            css.push_str(": ");
            css.push_str(&declaration.value);
            css.push_str(";\n");
        }

        css.push_str(&indent);
        css.push_str("}\n");
    }
}

/// CSS document - collection of CSS rules in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualCssDocument {
    pub rules: Vec<CssRule>,
}

impl VirtualCssDocument {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: CssRule) {
        self.rules.push(rule);
    }

    /// Convert to CSS text. Rules are separated by a blank line.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (index, rule) in self.rules.iter().enumerate() {
            if index > 0 {
                css.push('\n');
            }

            match &rule.media_query {
                Some(query) => {
                    css.push_str("@media ");
                    css.push_str(query);
                    css.push_str(" {\n");
                    rule.write_block(&mut css, 1);
                    css.push_str("}\n");
                }
                None => rule.write_block(&mut css, 0),
            }
        }

        css
    }
}
