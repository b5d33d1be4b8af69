//! Element tree walking.
//!
//! A depth-first walk from each top-level element of a submodel, descending
//! into every container regardless of its addressing convention. Each element
//! the predicate accepts is reported with its ancestor chain:
//!
//! ```text
//! Root (Collection)                 chains for `Element::is_file`:
//! ├── Manual (File)          →      [Root, Manual]
//! └── Docs (List)
//!     └── [0] (Collection)
//!         └── Sheet (File)   →      [Root, Docs, [0], Sheet]
//! ```
//!
//! Two collectors are built on the walker:
//!
//! - [`collect_file_element_paths`] - ancestor chains of every `File`
//! - [`collect_semantic_ids`] - distinct semantic reference values of an environment

mod collectors;
mod walker;

pub use collectors::{collect_file_element_paths, collect_semantic_ids};
pub use walker::{ElementChain, ElementWalker};
