use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use swatch_compiler_css::{emit_with_options, EmitOptions};
use swatch_theme::ThemeLoader;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Theme files to compile (defaults to `themes` from the config)
    pub themes: Vec<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Custom property prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Fail on references to undefined tokens
    #[arg(long)]
    pub strict: bool,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let theme_files = config.theme_paths(cwd, &args.themes);

    if theme_files.is_empty() {
        return Err(anyhow!(
            "No theme files given and no `themes` listed in {}",
            crate::config::DEFAULT_CONFIG_NAME
        ));
    }

    let options = config.emit_options(args.prefix.as_deref(), args.strict);
    let out_dir = config.get_out_dir(cwd, args.out_dir.as_deref());
    let loader = ThemeLoader::new();

    if !args.stdout {
        println!("{}", "🎨 Compiling themes...".bright_blue().bold());
    }

    let mut success_count = 0;
    let mut error_count = 0;

    for theme_file in &theme_files {
        let relative_path = theme_file.strip_prefix(cwd).unwrap_or(theme_file);

        match compile_file(&loader, theme_file, &options, &out_dir, args.stdout) {
            Ok(output) => {
                success_count += 1;
                if !args.stdout {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        output
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if error_count > 0 {
        return Err(anyhow!(
            "Compiled {} themes, {} failed",
            success_count,
            error_count
        ));
    }

    if !args.stdout {
        println!();
        println!(
            "{} Compiled {} themes successfully",
            "✅".green(),
            success_count
        );
    }

    Ok(())
}

fn compile_file(
    loader: &ThemeLoader,
    theme_file: &Path,
    options: &EmitOptions,
    out_dir: &Path,
    stdout: bool,
) -> Result<String> {
    let theme = loader.load(theme_file)?;
    let css = emit_with_options(&theme, options.clone())?;

    if stdout {
        print!("{}", css);
        return Ok("stdout".to_string());
    }

    let output_file = out_dir.join(format!("{}.css", theme.name()));
    debug!(output = %output_file.display(), bytes = css.len(), "Writing stylesheet");

    fs::create_dir_all(out_dir)?;
    fs::write(&output_file, css)?;

    Ok(output_file.display().to_string())
}
