//! IdShort paths: canonical names for elements inside a submodel.
//!
//! An idShort path names an element by the chain of containers leading to
//! it. Keyed containers (collections) contribute `.idShort` segments,
//! ordered containers (lists) contribute `[index]` runs:
//!
//! ```text
//! Root (Collection)
//! └── Docs (List)
//!     ├── [0] Property
//!     └── [1] Entry (Collection)
//!         └── Manual (File)      →  "Root.Docs[1].Manual"
//! ```
//!
//! - [`build_id_short_path`] - ancestor chain → path string
//! - [`parse_id_short_path`] - path string → [`PathToken`]s
//! - [`resolve_id_short_path`] - path string → element in a tree

mod builder;
mod error;
mod parser;
mod resolve;

pub use builder::build_id_short_path;
pub use error::PathError;
pub use parser::{PathToken, parse_id_short_path};
pub use resolve::{resolve_id_short_path, resolve_id_short_path_mut, resolve_tokens};
