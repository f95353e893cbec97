use crate::config::Config;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use swatch_compiler_css::{web_tokens, WebToken};
use swatch_theme::ThemeLoader;

#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Theme file to list
    pub theme: PathBuf,

    /// Custom property prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,
}

pub fn tokens(args: TokensArgs, cwd: &Path) -> Result<()> {
    let listing = list_tokens(&args, cwd)?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn list_tokens(args: &TokensArgs, cwd: &Path) -> Result<Vec<WebToken>> {
    let config = Config::load(cwd)?;
    let options = config.emit_options(args.prefix.as_deref(), false);
    let theme = ThemeLoader::new().load(&cwd.join(&args.theme))?;
    Ok(web_tokens(&theme, &options))
}
