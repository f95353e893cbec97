//! Stylesheet emission for built themes.
//!
//! Every base token becomes a custom property inside a rule scoped to the
//! theme's data attribute; every resolved override becomes its own rule
//! block (plain selector, `min-width` media query, color mode attribute or
//! raw media query) in resolved order.

pub mod css_document;
pub mod emitter;
pub mod naming;
pub mod options;
pub mod web_tokens;

pub use css_document::{CssRule, Declaration, VirtualCssDocument};
pub use emitter::{CssResult, ThemeEmitter};
pub use naming::{property_name, var_reference};
pub use options::{EmitOptions, DEFAULT_PREFIX};
pub use web_tokens::{web_tokens, WebToken};

use swatch_theme::Theme;

/// Emit a theme's stylesheet with default options
pub fn emit(theme: &Theme) -> CssResult<String> {
    ThemeEmitter::default().emit(theme)
}

/// Emit with explicit naming/strictness options
pub fn emit_with_options(theme: &Theme, options: EmitOptions) -> CssResult<String> {
    ThemeEmitter::new(options).emit(theme)
}
