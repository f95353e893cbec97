use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swatch_compiler_css::{EmitOptions, DEFAULT_PREFIX};

pub const DEFAULT_CONFIG_NAME: &str = "swatch.config.json";

/// Swatch configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Custom property and attribute prefix
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Directory stylesheets are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Theme files compiled when none are given on the command line
    #[serde(default)]
    pub themes: Vec<String>,

    /// Fail on references to tokens the theme does not define
    #[serde(default)]
    pub strict_references: bool,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Emit options with command-line values taking precedence
    pub fn emit_options(&self, prefix: Option<&str>, strict: bool) -> EmitOptions {
        EmitOptions {
            prefix: prefix.unwrap_or(&self.prefix).to_string(),
            strict_references: strict || self.strict_references,
        }
    }

    /// Absolute output directory, preferring an explicit override
    pub fn get_out_dir(&self, cwd: &Path, out_dir: Option<&str>) -> PathBuf {
        cwd.join(out_dir.unwrap_or(&self.out_dir))
    }

    /// Theme files to compile: explicit paths, else the configured list
    pub fn theme_paths(&self, cwd: &Path, explicit: &[PathBuf]) -> Vec<PathBuf> {
        if explicit.is_empty() {
            self.themes.iter().map(|theme| cwd.join(theme)).collect()
        } else {
            explicit.iter().map(|path| cwd.join(path)).collect()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            out_dir: default_out_dir(),
            themes: vec![],
            strict_references: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "prefix": "amplify",
            "outDir": "build/css",
            "themes": ["themes/base.json", "themes/brand.json"],
            "strictReferences": true
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.prefix, "amplify");
        assert_eq!(config.out_dir, "build/css");
        assert_eq!(config.themes, vec!["themes/base.json", "themes/brand.json"]);
        assert!(config.strict_references);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.prefix, "swatch");
        assert_eq!(config.out_dir, "dist");
        assert!(config.themes.is_empty());
        assert!(!config.strict_references);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "prefix": "brand" }"#).unwrap();
        assert_eq!(config.prefix, "brand");
        assert_eq!(config.out_dir, "dist");
    }

    #[test]
    fn test_flags_win_over_config() {
        let config = Config {
            prefix: "brand".to_string(),
            strict_references: false,
            ..Config::default()
        };

        let options = config.emit_options(Some("cli"), true);
        assert_eq!(options.prefix, "cli");
        assert!(options.strict_references);

        let options = config.emit_options(None, false);
        assert_eq!(options.prefix, "brand");
        assert!(!options.strict_references);

        let cwd = Path::new("/project");
        assert_eq!(config.get_out_dir(cwd, Some("out")), PathBuf::from("/project/out"));
        assert_eq!(config.get_out_dir(cwd, None), PathBuf::from("/project/dist"));
    }

    #[test]
    fn test_theme_paths_fall_back_to_config() {
        let config = Config {
            themes: vec!["themes/base.json".to_string()],
            ..Config::default()
        };
        let cwd = Path::new("/project");

        assert_eq!(
            config.theme_paths(cwd, &[]),
            vec![PathBuf::from("/project/themes/base.json")]
        );
        assert_eq!(
            config.theme_paths(cwd, &[PathBuf::from("other.json")]),
            vec![PathBuf::from("/project/other.json")]
        );
    }
}
