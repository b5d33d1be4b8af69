//! Serialization formats of environment files.

use std::path::Path;

/// The serialization an environment file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SerializationFormat {
    Json,
    Xml,
    /// Zipped package carrying the environment and its related files.
    Aasx,
}

impl SerializationFormat {
    pub const ALL: [Self; 3] = [Self::Json, Self::Xml, Self::Aasx];

    /// Detect the format from a file extension (without the dot, any case).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            "aasx" => Some(Self::Aasx),
            _ => None,
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Detect the format from a MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/json" => Some(Self::Json),
            "application/xml" | "text/xml" => Some(Self::Xml),
            "application/asset-administration-shell-package"
            | "application/asset-administration-shell-package+xml" => Some(Self::Aasx),
            _ => None,
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Xml => &["xml"],
            Self::Aasx => &["aasx"],
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Aasx => "application/asset-administration-shell-package+xml",
        }
    }

    /// Whether files of this format can carry related files.
    pub fn is_package(&self) -> bool {
        matches!(self, Self::Aasx)
    }
}

impl std::fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Aasx => "AASX",
        })
    }
}

/// File extensions the preconfiguration loader picks up from directories.
pub fn supported_extensions() -> Vec<&'static str> {
    SerializationFormat::ALL
        .iter()
        .flat_map(|format| format.extensions())
        .copied()
        .collect()
}
