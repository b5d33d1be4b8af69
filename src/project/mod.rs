//! Preconfiguration: loading environment files from disk into the stores.
//!
//! ```text
//! LoaderConfig { paths, link_related_files }
//!        │
//!        ▼
//! PreconfigurationLoader::resolve_files   files and directories → sorted file list
//!        │
//!        ▼   for each file (i/n)
//! SerializationFormat::from_path → EnvironmentParser::parse → EnvironmentIngestor
//! ```
//!
//! Turning bytes into an environment is left to an [`EnvironmentParser`]
//! supplied by the caller; this crate ships no JSON, XML or AASX reader.

mod config;
mod error;
mod format;
mod loader;
mod parser;

pub use config::LoaderConfig;
pub use error::LoadError;
pub use format::{SerializationFormat, supported_extensions};
pub use loader::{LoadSummary, PreconfigurationLoader};
pub use parser::{EnvironmentParser, ParseError};
