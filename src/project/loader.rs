//! The preconfiguration loader.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::config::LoaderConfig;
use super::error::LoadError;
use super::format::{SerializationFormat, supported_extensions};
use super::parser::EnvironmentParser;
use crate::ingest::{EnvironmentIngestor, IdentifiableStore, IngestSummary, SubmodelStore};
use crate::model::{ConceptDescription, Shell};

/// What a preconfiguration load did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Files loaded, in load order.
    pub files: Vec<PathBuf>,
    /// Ingestion counts over all files.
    pub ingest: IngestSummary,
}

/// Loads the environment files named by a [`LoaderConfig`] into stores.
pub struct PreconfigurationLoader {
    config: LoaderConfig,
}

impl PreconfigurationLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Returns true if any path is configured.
    pub fn should_load(&self) -> bool {
        !self.config.paths.is_empty()
    }

    /// Expand the configured paths into the list of files to load.
    ///
    /// A configured file is taken as is. A configured directory is scanned
    /// recursively for files with a supported extension; the files found in
    /// one directory are sorted by path. Configuration order is kept across
    /// entries.
    pub fn resolve_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let mut files = Vec::new();

        for path in &self.config.paths {
            let metadata = std::fs::metadata(path).map_err(|e| LoadError::io(path, e))?;
            if metadata.is_file() {
                files.push(path.clone());
            } else {
                files.extend(scan_directory(path)?);
            }
        }

        Ok(files)
    }

    /// Parse and ingest every configured file, in order.
    ///
    /// Stops at the first file that cannot be read, parsed or ingested.
    /// Files loaded before the failure stay loaded.
    pub fn load<P, A, S, C>(
        &self,
        parser: &P,
        ingestor: &EnvironmentIngestor<A, S, C>,
    ) -> Result<LoadSummary, LoadError>
    where
        P: EnvironmentParser + ?Sized,
        A: IdentifiableStore<Shell>,
        S: SubmodelStore,
        C: IdentifiableStore<ConceptDescription>,
    {
        info!("Scanning for preconfigured environments");
        let files = self.resolve_files()?;
        info!(count = files.len(), "Found preconfigured environments");

        let mut summary = LoadSummary::default();
        let total = files.len();

        for (index, path) in files.into_iter().enumerate() {
            info!(
                "Loading environment ({}/{}) from file {}",
                index + 1,
                total,
                file_name(&path)
            );
            let file_summary = self.load_file(&path, parser, ingestor)?;
            summary.ingest.merge(&file_summary);
            summary.files.push(path);
        }

        Ok(summary)
    }

    fn load_file<P, A, S, C>(
        &self,
        path: &Path,
        parser: &P,
        ingestor: &EnvironmentIngestor<A, S, C>,
    ) -> Result<IngestSummary, LoadError>
    where
        P: EnvironmentParser + ?Sized,
        A: IdentifiableStore<Shell>,
        S: SubmodelStore,
        C: IdentifiableStore<ConceptDescription>,
    {
        let format = SerializationFormat::from_path(path)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
        let bytes = std::fs::read(path).map_err(|e| LoadError::io(path, e))?;

        let complete = parser.parse(&bytes, format).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            %format,
            related_files = complete.related_files.len(),
            "parsed environment"
        );

        let result = if self.config.link_related_files && format.is_package() {
            ingestor.ingest_complete(&complete)
        } else {
            ingestor.ingest(&complete.environment)
        };
        result.map_err(|source| LoadError::Ingest {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Supported files under `dir`, sorted by path.
fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let extensions = supported_extensions();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            LoadError::io(path, e.into())
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), &extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "scanned directory");
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
