pub mod compile;
pub mod tokens;

pub use compile::{compile, CompileArgs};
pub use tokens::{tokens, TokensArgs};
