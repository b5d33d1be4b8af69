//! # aasenv-base
//!
//! Environment ingestion and structural addressing for Asset Administration
//! Shell models.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Preconfiguration loading: config, formats, parser boundary
//!   ↓
//! ingest    → Version resolver, store traits, in-memory stores, ingestor
//!   ↓
//! walk      → Element tree walker, file path and semantic id collectors
//!   ↓
//! path      → IdShort path builder, parser, resolver
//!   ↓
//! model     → Environment, Shell, Submodel, ConceptDescription, Element tree
//! ```

// ============================================================================
// MODULES (dependency order: model → path → walk → ingest → project)
// ============================================================================

/// In-memory model: environments, identifiables, element trees, references
pub mod model;

/// IdShort paths: chain → string, string → tokens, tokens → element
pub mod path;

/// Depth-first element tree walking and the collectors built on it
pub mod walk;

/// Ingestion of environments into shell, submodel and concept description stores
pub mod ingest;

/// Loading preconfigured environment files from disk
pub mod project;

// Re-export the types most callers need
pub use ingest::{EnvironmentIngestor, IngestError, IngestSummary};
pub use model::{CompleteEnvironment, Element, ElementKind, Environment};
pub use path::{PathError, build_id_short_path};
