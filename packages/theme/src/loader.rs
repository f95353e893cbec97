//! Loads theme definitions from JSON files, following `extends` chains.

use crate::theme::{Theme, ThemeDefinition};
use std::path::{Path, PathBuf};
use swatch_common::{CommonError, CommonResult, FileSystem, RealFileSystem};
use tracing::{debug, info, instrument};

pub struct ThemeLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl ThemeLoader<RealFileSystem> {
    pub fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for ThemeLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> ThemeLoader<F> {
    pub fn with_file_system(fs: F) -> Self {
        Self { fs }
    }

    /// Load and build the theme at `path`.
    ///
    /// A relative `extends` is resolved against the directory of the file
    /// that declares it. The parent is built first and the child is built on
    /// top of it.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> CommonResult<Theme> {
        let mut chain = Vec::new();
        let theme = self.load_chain(path, &mut chain)?;
        info!(theme = %theme.name(), depth = chain.len(), "Theme loaded");
        Ok(theme)
    }

    /// Read and validate a single definition without following `extends`
    pub fn read_definition(&self, path: &Path) -> CommonResult<ThemeDefinition> {
        let source = self.fs.read_to_string(path)?;
        let definition: ThemeDefinition = serde_json::from_str(&source)?;
        definition.validate()?;
        Ok(definition)
    }

    fn load_chain(&self, path: &Path, chain: &mut Vec<PathBuf>) -> CommonResult<Theme> {
        let path = self.fs.canonicalize(path)?;
        if chain.contains(&path) {
            return Err(CommonError::ExtendsCycle {
                path: path.display().to_string(),
            });
        }
        chain.push(path.clone());

        let definition = self.read_definition(&path)?;
        let parent = match &definition.extends {
            Some(extends) => {
                let parent_path = path
                    .parent()
                    .map(|dir| dir.join(extends))
                    .unwrap_or_else(|| PathBuf::from(extends));
                debug!(theme = %definition.name, parent = %parent_path.display(), "Following extends");
                Some(self.load_chain(&parent_path, chain)?)
            }
            None => None,
        };

        Ok(Theme::build(definition, parent.as_ref()))
    }
}
