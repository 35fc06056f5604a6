//! Full pipeline: solid in, depth-sorted and visibility-tagged 2D drawing out

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::geometry::{Solid, SolidGeometry, SphereGeometry};
use crate::path::{
    calculate_sphere_view_box, calculate_view_box_3d, describe_edge_line, describe_face_path,
    LineSegment, PathDescriptor, ViewBox, DEFAULT_PADDING,
};
use crate::projection::{to_screen, Point2D, ProjectedPoint, ProjectionConfig};
use crate::solid::{generate_solid, GeneratorOptions, SolidDimensions};
use crate::visibility::{EdgeVisibility, ViewSpace};

/// Where and how large the drawing lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub center_x: f64,
    pub center_y: f64,
    /// Multiplied with the projection's own scale.
    pub scale: f64,
    pub padding: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            center_x: 200.0,
            center_y: 200.0,
            scale: 1.0,
            padding: DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDrawing {
    /// Index into the mesh's face list.
    pub index: usize,
    pub path: PathDescriptor,
    pub front_facing: bool,
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDrawing {
    /// Index into the mesh's edge list.
    pub index: usize,
    pub line: LineSegment,
    pub visibility: EdgeVisibility,
}

/// A polyhedral solid ready to draw. `faces` is already in back-to-front
/// order; `edges` keeps mesh order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshDrawing {
    pub vertices: Vec<ProjectedPoint>,
    pub faces: Vec<FaceDrawing>,
    pub edges: Vec<EdgeDrawing>,
    pub view_box: ViewBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

/// A sphere ready to draw: its outline circle and its equator.
///
/// When the view looks down on the sphere (positive elevation) the upper
/// half of the equator ellipse is the far side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereDrawing {
    pub center: Point2D,
    pub radius: f64,
    pub equator: Ellipse,
    pub view_box: ViewBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Drawing {
    Mesh(MeshDrawing),
    Sphere(SphereDrawing),
}

/// Project, classify and order `solid` for drawing.
#[instrument(skip_all, fields(projection = %config.kind, azimuth = config.azimuth, elevation = config.elevation))]
pub fn render_solid(solid: &Solid, config: &ProjectionConfig, options: &RenderOptions) -> Drawing {
    match solid {
        Solid::Mesh(mesh) => Drawing::Mesh(render_mesh(mesh, config, options)),
        Solid::Sphere(sphere) => Drawing::Sphere(render_sphere(sphere, config, options)),
    }
}

/// Validate, generate and render in one call.
pub fn draw_solid(
    dimensions: &SolidDimensions,
    config: &ProjectionConfig,
    generator: &GeneratorOptions,
    options: &RenderOptions,
) -> Result<Drawing> {
    let solid = generate_solid(dimensions, generator)?;
    Ok(render_solid(&solid, config, options))
}

fn render_mesh(mesh: &SolidGeometry, config: &ProjectionConfig, options: &RenderOptions) -> MeshDrawing {
    let view = ViewSpace::new(mesh, config);
    let vertices = view.project(options.center_x, options.center_y, options.scale);

    let faces: Vec<FaceDrawing> = view
        .sort_faces_by_depth()
        .into_iter()
        .map(|index| FaceDrawing {
            index,
            path: describe_face_path(&vertices, &mesh.faces()[index]),
            front_facing: view.is_face_front_facing(index),
            depth: view.face_depth(index),
        })
        .collect();

    let edges: Vec<EdgeDrawing> = mesh
        .edges()
        .iter()
        .zip(view.edge_visibilities())
        .enumerate()
        .map(|(index, (&(a, b), visibility))| EdgeDrawing {
            index,
            line: describe_edge_line(&vertices[a], &vertices[b]),
            visibility,
        })
        .collect();

    let view_box = calculate_view_box_3d(&vertices, options.padding);

    debug!(
        faces = faces.len(),
        front = faces.iter().filter(|f| f.front_facing).count(),
        hidden_edges = edges.iter().filter(|e| !e.visibility.is_visible()).count(),
        "rendered mesh"
    );

    MeshDrawing {
        vertices,
        faces,
        edges,
        view_box,
    }
}

fn render_sphere(sphere: &SphereGeometry, config: &ProjectionConfig, options: &RenderOptions) -> SphereDrawing {
    let rotated = config.rotation().apply(&sphere.center);
    let center = to_screen(&rotated, config, options.center_x, options.center_y, options.scale).to_point2d();
    let radius = sphere.radius * options.scale * config.scale;

    SphereDrawing {
        center,
        radius,
        equator: Ellipse {
            cx: center.x,
            cy: center.y,
            rx: radius,
            ry: radius * config.elevation.to_radians().sin().abs(),
        },
        view_box: calculate_sphere_view_box(&center, radius, options.padding),
    }
}
