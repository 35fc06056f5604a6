//! geosolid core - stateless solid geometry for instructional line art
//!
//! Turns solid dimensions into a mesh, rotates and projects it
//! orthographically, classifies faces and edges as front/back and
//! visible/hidden, orders faces for painter's-algorithm overdraw and emits
//! SVG-ready path descriptors. Volumes and surface areas are computed
//! straight from the dimensions.
//!
//! Every function is pure: no caching, no global state, safe to call from
//! any number of threads at once.

pub mod error;
pub mod geometry;
pub mod measure;
pub mod path;
pub mod projection;
pub mod render;
pub mod solid;
pub mod transform;
pub mod validation;
pub mod visibility;

// Re-export commonly used types
pub use error::{GeometryError, Result};
pub use geometry::{Point3D, Solid, SolidGeometry, SphereGeometry, Vec3};
pub use path::{
    calculate_sphere_view_box, calculate_view_box_3d, describe_edge_line, describe_face_path,
    LineSegment, PathCommand, PathDescriptor, ViewBox,
};
pub use projection::{
    normalize_projection_config, project_3d_to_2d, project_vertices, project_with_rotation,
    Point2D, ProjectedPoint, ProjectionConfig, ProjectionKind, ProjectionOptions,
};
pub use render::{draw_solid, render_solid, Drawing, MeshDrawing, RenderOptions, SphereDrawing};
pub use solid::{generate_solid, GeneratorOptions, SolidDimensions, SolidKind};
pub use transform::{rotate_point, ViewRotation};
pub use validation::{validate_solid_dimensions, ValidationResult};
pub use visibility::{edge_visibilities, sort_faces_by_depth, EdgeVisibility, ViewSpace};
