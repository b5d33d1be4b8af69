//! Loader configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// Which environment files to preload and how.
///
/// ```json
/// { "paths": ["aas/plant.aasx", "aas/extra/"], "linkRelatedFiles": true }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderConfig {
    /// Environment files, or directories scanned recursively for them.
    pub paths: Vec<PathBuf>,
    /// Bind the related files of packages to the File elements that
    /// reference them.
    pub link_related_files: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            link_related_files: true,
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_link_related_files(mut self, link: bool) -> Self {
        self.link_related_files = link;
        self
    }

    /// Build from a comma-separated list such as `"env.json, aas/"`.
    ///
    /// Entries are trimmed; empty entries are ignored.
    pub fn from_path_list(list: &str) -> Self {
        Self::default().with_paths(
            list.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a JSON configuration file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Self::from_json_str(&content)
            .map_err(|e| LoadError::Config(format!("{}: {}", path.display(), e)))
    }
}
