//! Error types for solid generation and mesh construction

use thiserror::Error;

use crate::solid::SolidKind;

/// Errors raised by the geometry pipeline.
///
/// Invalid user input is normally reported as data through
/// [`ValidationResult`](crate::validation::ValidationResult); this type is
/// what the generator returns when it is handed such input anyway, and what
/// mesh construction returns for structurally broken meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid {solid} dimensions: {message}")]
    InvalidDimensions { solid: SolidKind, message: String },

    #[error("curved solids need between 3 and {max} segments, got {0}", max = crate::solid::MAX_SEGMENTS)]
    InvalidSegments(usize),

    #[error("face {face} references vertex {index}, but the mesh has {len} vertices")]
    FaceIndexOutOfRange { face: usize, index: usize, len: usize },

    #[error("edge {edge} references vertex {index}, but the mesh has {len} vertices")]
    EdgeIndexOutOfRange { edge: usize, index: usize, len: usize },

    #[error("face {face} has {len} vertices, at least 3 are required")]
    DegenerateFace { face: usize, len: usize },

    #[error("unknown projection type '{0}'")]
    UnknownProjection(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
