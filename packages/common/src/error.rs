use thiserror::Error;

/// Invalid theme input detected while building or emitting a theme
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Override rule has no condition; expected one of selector, breakpoint, colorMode or mediaQuery")]
    MissingDiscriminant,

    #[error("Override rule sets more than one condition: {}", fields.join(", "))]
    ConflictingDiscriminants { fields: Vec<&'static str> },

    #[error("Unknown breakpoint '{name}'")]
    UnknownBreakpoint { name: String },

    #[error("Default breakpoint '{name}' is not in the breakpoint table")]
    UnknownDefaultBreakpoint { name: String },

    #[error("Token reference '{reference}' does not point at a token")]
    UnresolvedReference { reference: String },

    #[error("Theme name must not be empty")]
    EmptyThemeName,

    #[error("Theme name '{name}' must not contain path separators")]
    InvalidThemeName { name: String },
}

/// Common error type for loading and compiling themes
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Theme '{path}' is part of an extends cycle")]
    ExtendsCycle { path: String },
}
