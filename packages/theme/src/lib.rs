//! Theme building: override rules, override resolution across theme
//! inheritance, breakpoint tables and loading theme files.

pub mod breakpoints;
pub mod classifier;
pub mod loader;
pub mod override_resolution;
pub mod override_rule;
pub mod theme;

pub use breakpoints::{BreakpointOverrides, Breakpoints, DEFAULT_BREAKPOINT};
pub use classifier::{
    is_breakpoint_override, is_color_mode_override, is_media_query_override,
    is_selector_override,
};
pub use loader::ThemeLoader;
pub use override_resolution::resolve_overrides;
pub use override_rule::{ColorMode, OverrideCondition, OverrideKind, OverrideRule};
pub use theme::{Theme, ThemeDefinition};
