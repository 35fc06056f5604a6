//! Back-face classification, edge visibility and painter's-algorithm ordering.
//!
//! All of it runs on one array of view-rotated vertices, built once per
//! render by [`ViewSpace::new`]. Projection reads the same array, so the
//! drawn silhouette and the front/back split cannot disagree.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::geometry::{centroid, cross, normalize, Point3D, SolidGeometry, Vec3};
use crate::projection::{to_screen, ProjectedPoint, ProjectionConfig};

/// Whether an edge should be drawn solid or dashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeVisibility {
    Visible,
    Hidden,
}

impl EdgeVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, EdgeVisibility::Visible)
    }
}

/// Outward unit normal of `face`, from its first three vertices.
///
/// Faces with fewer than three resolvable vertices, or whose leading
/// vertices are collinear, get `+Z`.
pub fn face_normal(vertices: &[Point3D], face: &[usize]) -> Vec3 {
    let corners: Option<Vec<&Point3D>> = face.iter().take(3).map(|&i| vertices.get(i)).collect();
    let Some([a, b, c]) = corners.as_deref() else {
        return Vec3::z();
    };

    let normal = normalize(&cross(&(*b - *a), &(*c - *a)));
    if normal == Vec3::zeros() {
        warn!(?face, "collinear face, falling back to +Z normal");
        return Vec3::z();
    }
    normal
}

/// A solid rotated into view space.
///
/// Camera sits on +Z looking toward -Z: a face whose rotated normal has a
/// positive Z component faces the viewer, and larger Z is nearer.
#[derive(Debug, Clone)]
pub struct ViewSpace<'a> {
    geometry: &'a SolidGeometry,
    config: ProjectionConfig,
    rotated: Vec<Point3D>,
    front_facing: Vec<bool>,
    /// Faces incident to each vertex.
    vertex_faces: Vec<Vec<usize>>,
}

impl<'a> ViewSpace<'a> {
    pub fn new(geometry: &'a SolidGeometry, config: &ProjectionConfig) -> Self {
        let rotation = config.rotation();
        let rotated: Vec<Point3D> = geometry.vertices().iter().map(|v| rotation.apply(v)).collect();

        let front_facing = geometry
            .faces()
            .iter()
            .map(|face| face_normal(&rotated, face).z > 0.0)
            .collect();

        let mut vertex_faces = vec![Vec::new(); rotated.len()];
        for (f, face) in geometry.faces().iter().enumerate() {
            for &v in face {
                vertex_faces[v].push(f);
            }
        }

        Self {
            geometry,
            config: *config,
            rotated,
            front_facing,
            vertex_faces,
        }
    }

    /// Vertices after the view rotation, in source order.
    pub fn rotated_vertices(&self) -> &[Point3D] {
        &self.rotated
    }

    pub fn is_face_front_facing(&self, face: usize) -> bool {
        self.front_facing[face]
    }

    pub fn front_facing(&self) -> &[bool] {
        &self.front_facing
    }

    /// View-space Z of the face centroid.
    pub fn face_depth(&self, face: usize) -> f64 {
        let points: Vec<Point3D> = self.geometry.faces()[face]
            .iter()
            .map(|&i| self.rotated[i])
            .collect();
        centroid(&points).z
    }

    /// Face indices ordered back to front. Equal depths keep their mesh
    /// order.
    pub fn sort_faces_by_depth(&self) -> Vec<usize> {
        let depths: Vec<f64> = (0..self.geometry.faces().len())
            .map(|f| self.face_depth(f))
            .collect();
        let mut order: Vec<usize> = (0..depths.len()).collect();
        order.sort_by(|&a, &b| depths[a].total_cmp(&depths[b]));
        order
    }

    /// Faces that contain both endpoints of edge `(a, b)`.
    fn adjacent_faces(&self, (a, b): (usize, usize)) -> impl Iterator<Item = usize> + '_ {
        self.vertex_faces[a]
            .iter()
            .copied()
            .filter(move |f| self.vertex_faces[b].contains(f))
    }

    /// An edge is visible when any adjacent face is front facing.
    pub fn edge_visibility(&self, edge: usize) -> EdgeVisibility {
        let endpoints = self.geometry.edges()[edge];
        if self.adjacent_faces(endpoints).any(|f| self.front_facing[f]) {
            EdgeVisibility::Visible
        } else {
            EdgeVisibility::Hidden
        }
    }

    pub fn edge_visibilities(&self) -> Vec<EdgeVisibility> {
        (0..self.geometry.edges().len())
            .map(|e| self.edge_visibility(e))
            .collect()
    }

    /// A vertex is visible when it lies on at least one front-facing face.
    pub fn is_vertex_visible(&self, vertex: usize) -> bool {
        self.vertex_faces[vertex].iter().any(|&f| self.front_facing[f])
    }

    /// Screen-space vertices with their visibility filled in.
    pub fn project(&self, center_x: f64, center_y: f64, scale: f64) -> Vec<ProjectedPoint> {
        self.rotated
            .iter()
            .enumerate()
            .map(|(i, p)| ProjectedPoint {
                visible: self.is_vertex_visible(i),
                ..to_screen(p, &self.config, center_x, center_y, scale)
            })
            .collect()
    }
}

/// Face indices in painter's order for `geometry` under `config`.
#[instrument(skip_all, fields(faces = geometry.faces().len()))]
pub fn sort_faces_by_depth(geometry: &SolidGeometry, config: &ProjectionConfig) -> Vec<usize> {
    ViewSpace::new(geometry, config).sort_faces_by_depth()
}

/// Visibility of every edge of `geometry` under `config`, in edge order.
#[instrument(skip_all, fields(edges = geometry.edges().len()))]
pub fn edge_visibilities(geometry: &SolidGeometry, config: &ProjectionConfig) -> Vec<EdgeVisibility> {
    ViewSpace::new(geometry, config).edge_visibilities()
}

/// Front-facing flag of every face of `geometry` under `config`.
pub fn front_facing_faces(geometry: &SolidGeometry, config: &ProjectionConfig) -> Vec<bool> {
    ViewSpace::new(geometry, config).front_facing().to_vec()
}
