//! Error types for generation operations
//!
//! Contradictions are deliberately absent from this taxonomy: an emptied
//! option set is masked by the backup-tile substitution at collapse time
//! and never surfaces as an error.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile catalog content doesn't meet structural requirements
    ///
    /// Covers empty catalogs, duplicate tile names, dangling adjacency
    /// references, and mis-sized adjacency sets. Raised at load or
    /// construction time, never mid-run.
    InvalidTileset {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Failed to parse a tileset file as JSON
    TilesetParse {
        /// Path to the tileset file
        path: PathBuf,
        /// Underlying JSON parse error
        source: serde_json::Error,
    },

    /// Tile index exceeds the catalog
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the catalog
        max_tiles: usize,
    },

    /// A should-never-happen condition was hit mid-run
    ///
    /// The only instance is selection finding no uncollapsed cell before
    /// the iteration counter reaches `dimensions`². Defensive, not
    /// recoverable.
    InternalInvariant {
        /// Description of the violated invariant
        detail: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileset { reason } => {
                write!(f, "Invalid tileset: {reason}")
            }
            Self::TilesetParse { path, source } => {
                write!(
                    f,
                    "Failed to parse tileset '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds (catalog has {max_tiles} tiles)"
                )
            }
            Self::InternalInvariant { detail } => {
                write!(f, "Internal invariant violated: {detail}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TilesetParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
