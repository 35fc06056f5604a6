//! Geometry primitives: points, vector operations and solid meshes

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeometryError, Result};

/// A point in model space. Y points up.
pub type Point3D = Point3<f64>;

/// A free vector in model space.
pub type Vec3 = Vector3<f64>;

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

pub fn subtract(a: &Point3D, b: &Point3D) -> Vec3 {
    a - b
}

pub fn scale(v: &Vec3, factor: f64) -> Vec3 {
    v * factor
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Euclidean norm.
pub fn length(v: &Vec3) -> f64 {
    v.norm()
}

/// Unit vector in the direction of `v`.
///
/// A zero-length input yields the zero vector rather than NaNs; callers
/// treat a zero result as degenerate.
pub fn normalize(v: &Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}

/// Arithmetic mean of `points`, or the origin for an empty slice.
pub fn centroid(points: &[Point3D]) -> Point3D {
    if points.is_empty() {
        return Point3D::origin();
    }
    let sum = points
        .iter()
        .fold(Vec3::zeros(), |acc, p| acc + p.coords);
    Point3D::from(sum / points.len() as f64)
}

/// A polyhedral solid: vertices, faces as index polygons and edges as
/// index pairs.
///
/// Faces are wound counter-clockwise when seen from outside the solid, so
/// the right-hand normal of the first three vertices points outward. The
/// visibility stage depends on that convention.
///
/// Construction goes through [`SolidGeometry::new`], which rejects faces
/// or edges that reference missing vertices and faces with fewer than three
/// vertices. Every `SolidGeometry` in circulation is therefore structurally
/// sound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidGeometry {
    vertices: Vec<Point3D>,
    faces: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl SolidGeometry {
    pub fn new(
        vertices: Vec<Point3D>,
        faces: Vec<Vec<usize>>,
        edges: Vec<(usize, usize)>,
    ) -> Result<Self> {
        let len = vertices.len();

        for (face, indices) in faces.iter().enumerate() {
            if indices.len() < 3 {
                return Err(GeometryError::DegenerateFace {
                    face,
                    len: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i >= len) {
                return Err(GeometryError::FaceIndexOutOfRange { face, index, len });
            }
        }

        for (edge, &(a, b)) in edges.iter().enumerate() {
            let index = a.max(b);
            if index >= len {
                return Err(GeometryError::EdgeIndexOutOfRange { edge, index, len });
            }
        }

        debug!(
            vertices = len,
            faces = faces.len(),
            edges = edges.len(),
            "built solid mesh"
        );

        Ok(Self {
            vertices,
            faces,
            edges,
        })
    }

    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Vertex positions of one face, in winding order.
    pub fn face_points(&self, face: usize) -> Vec<Point3D> {
        self.faces[face].iter().map(|&i| self.vertices[i]).collect()
    }

    /// Mean of all vertices.
    pub fn centroid(&self) -> Point3D {
        centroid(&self.vertices)
    }
}

/// A sphere, kept analytic instead of tessellated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereGeometry {
    pub center: Point3D,
    pub radius: f64,
}

/// Output of the generator: a mesh, or the special sphere case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Solid {
    Mesh(SolidGeometry),
    Sphere(SphereGeometry),
}

impl Solid {
    pub fn as_mesh(&self) -> Option<&SolidGeometry> {
        match self {
            Solid::Mesh(mesh) => Some(mesh),
            Solid::Sphere(_) => None,
        }
    }

    pub fn as_sphere(&self) -> Option<&SphereGeometry> {
        match self {
            Solid::Mesh(_) => None,
            Solid::Sphere(sphere) => Some(sphere),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_zero_vector() {
        let n = normalize(&Vec3::zeros());
        assert_eq!(n, Vec3::zeros());
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(&Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(length(&n), 1.0);
        assert_relative_eq!(n.x, 0.6);
        assert_relative_eq!(n.y, 0.8);
    }

    #[test]
    fn test_cross_is_right_handed() {
        let z = cross(&Vec3::x(), &Vec3::y());
        assert_eq!(z, Vec3::z());
        assert_relative_eq!(dot(&z, &Vec3::x()), 0.0);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-1.0, 0.5, 2.0);
        assert_eq!(add(&a, &b), Vec3::new(0.0, 2.5, 5.0));
        assert_eq!(scale(&a, 2.0), Vec3::new(2.0, 4.0, 6.0));
        let d = subtract(&Point3D::new(1.0, 1.0, 1.0), &Point3D::new(0.0, 2.0, -1.0));
        assert_eq!(d, Vec3::new(1.0, -1.0, 2.0));
    }

    #[test]
    fn test_centroid() {
        assert_eq!(centroid(&[]), Point3D::origin());

        let points = [
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(2.0, 0.0, 0.0),
            Point3D::new(2.0, 4.0, 0.0),
            Point3D::new(0.0, 4.0, 6.0),
        ];
        let c = centroid(&points);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 2.0);
        assert_relative_eq!(c.z, 1.5);
    }

    #[test]
    fn test_mesh_rejects_bad_indices() {
        let vertices = vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
        ];

        let err = SolidGeometry::new(vertices.clone(), vec![vec![0, 1, 3]], vec![]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::FaceIndexOutOfRange {
                face: 0,
                index: 3,
                len: 3
            }
        );

        let err = SolidGeometry::new(vertices.clone(), vec![vec![0, 1]], vec![]).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateFace { face: 0, len: 2 });

        let err = SolidGeometry::new(vertices.clone(), vec![], vec![(0, 1), (2, 5)]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::EdgeIndexOutOfRange {
                edge: 1,
                index: 5,
                len: 3
            }
        );

        assert!(SolidGeometry::new(vertices, vec![vec![0, 1, 2]], vec![(0, 1)]).is_ok());
    }
}
