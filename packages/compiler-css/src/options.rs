pub const DEFAULT_PREFIX: &str = "swatch";

/// Configuration options for stylesheet emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Prefix for custom properties and data attributes
    /// `swatch` yields `--swatch-colors-primary` and `data-swatch-theme`
    pub prefix: String,

    /// Fail on token references that do not point at a base token
    /// When false, references are rewritten to `var(...)` unchecked
    pub strict_references: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            strict_references: false,
        }
    }
}

impl EmitOptions {
    /// Default options with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Default options with strict reference checking enabled
    pub fn strict() -> Self {
        Self {
            strict_references: true,
            ..Default::default()
        }
    }

    /// Attribute naming the mounted theme, e.g. `data-swatch-theme`
    pub fn theme_attribute(&self) -> String {
        format!("data-{}-theme", self.prefix)
    }

    /// Attribute holding the externally chosen color mode (`system`, `light` or `dark`)
    pub fn color_mode_attribute(&self) -> String {
        format!("data-{}-color-mode", self.prefix)
    }

    /// Selector scoping rules to one theme, e.g. `[data-swatch-theme="dark-brand"]`
    pub fn theme_selector(&self, theme_name: &str) -> String {
        format!("[{}=\"{}\"]", self.theme_attribute(), theme_name)
    }
}
