//! Solid dimensions and mesh generation.
//!
//! Every solid is built centered at the origin with Y up. Prismatic solids
//! share one extrusion routine and pointed solids share one apex routine, so
//! the face winding is decided in exactly two places.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{GeometryError, Result};
use crate::geometry::{Point3D, Solid, SolidGeometry, SphereGeometry};
use crate::validation::validate_solid_dimensions;

/// Default number of sides used to approximate circles.
pub const DEFAULT_SEGMENTS: usize = 24;

/// Upper bound on circle segments; keeps mesh allocation bounded.
pub const MAX_SEGMENTS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeDimensions {
    #[serde(rename = "lado")]
    pub side: f64,
}

/// Box with `length` along X, `height` along Y and `width` along Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularPrismDimensions {
    #[serde(rename = "largo")]
    pub length: f64,
    #[serde(rename = "ancho")]
    pub width: f64,
    #[serde(rename = "alto")]
    pub height: f64,
}

/// Upright prism over an isosceles triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularPrismDimensions {
    /// Length of the triangle's base side.
    #[serde(rename = "lado_base")]
    pub base_side: f64,
    /// Height of the triangle, measured from its base side.
    #[serde(rename = "altura_base")]
    pub base_height: f64,
    /// Height of the prism.
    #[serde(rename = "altura")]
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquarePyramidDimensions {
    #[serde(rename = "lado_base")]
    pub base_side: f64,
    #[serde(rename = "altura")]
    pub height: f64,
}

/// Pyramid over an equilateral triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularPyramidDimensions {
    #[serde(rename = "lado_base")]
    pub base_side: f64,
    #[serde(rename = "altura")]
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderDimensions {
    #[serde(rename = "radio")]
    pub radius: f64,
    #[serde(rename = "altura")]
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeDimensions {
    #[serde(rename = "radio")]
    pub radius: f64,
    #[serde(rename = "altura")]
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereDimensions {
    #[serde(rename = "radio")]
    pub radius: f64,
}

/// Dimensions of one solid, tagged by its kind.
///
/// The wire form is `{"tipo": "cubo", "lado": 100}`, matching the
/// identifiers the host application stores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum SolidDimensions {
    #[serde(rename = "cubo")]
    Cube(CubeDimensions),
    #[serde(rename = "prisma_rectangular")]
    RectangularPrism(RectangularPrismDimensions),
    #[serde(rename = "prisma_triangular")]
    TriangularPrism(TriangularPrismDimensions),
    #[serde(rename = "piramide_cuadrada")]
    SquarePyramid(SquarePyramidDimensions),
    #[serde(rename = "piramide_triangular")]
    TriangularPyramid(TriangularPyramidDimensions),
    #[serde(rename = "cilindro")]
    Cylinder(CylinderDimensions),
    #[serde(rename = "cono")]
    Cone(ConeDimensions),
    #[serde(rename = "esfera")]
    Sphere(SphereDimensions),
}

impl SolidDimensions {
    pub fn kind(&self) -> SolidKind {
        match self {
            SolidDimensions::Cube(_) => SolidKind::Cube,
            SolidDimensions::RectangularPrism(_) => SolidKind::RectangularPrism,
            SolidDimensions::TriangularPrism(_) => SolidKind::TriangularPrism,
            SolidDimensions::SquarePyramid(_) => SolidKind::SquarePyramid,
            SolidDimensions::TriangularPyramid(_) => SolidKind::TriangularPyramid,
            SolidDimensions::Cylinder(_) => SolidKind::Cylinder,
            SolidDimensions::Cone(_) => SolidKind::Cone,
            SolidDimensions::Sphere(_) => SolidKind::Sphere,
        }
    }
}

/// The solid families, without their dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolidKind {
    #[serde(rename = "cubo")]
    Cube,
    #[serde(rename = "prisma_rectangular")]
    RectangularPrism,
    #[serde(rename = "prisma_triangular")]
    TriangularPrism,
    #[serde(rename = "piramide_cuadrada")]
    SquarePyramid,
    #[serde(rename = "piramide_triangular")]
    TriangularPyramid,
    #[serde(rename = "cilindro")]
    Cylinder,
    #[serde(rename = "cono")]
    Cone,
    #[serde(rename = "esfera")]
    Sphere,
}

impl SolidKind {
    /// Whether the mesh approximates a circle and honors the segment count.
    pub fn is_curved(&self) -> bool {
        matches!(self, SolidKind::Cylinder | SolidKind::Cone)
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolidKind::Cube => "cubo",
            SolidKind::RectangularPrism => "prisma rectangular",
            SolidKind::TriangularPrism => "prisma triangular",
            SolidKind::SquarePyramid => "pirámide cuadrada",
            SolidKind::TriangularPyramid => "pirámide triangular",
            SolidKind::Cylinder => "cilindro",
            SolidKind::Cone => "cono",
            SolidKind::Sphere => "esfera",
        };
        f.write_str(name)
    }
}

/// Tessellation settings for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Sides of the polygon that stands in for a circle.
    pub segments: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Build the mesh (or sphere) for `dimensions`.
///
/// Dimensions are validated first; invalid input fails with
/// [`GeometryError::InvalidDimensions`] instead of producing a broken mesh.
#[instrument(skip_all, fields(solid = %dimensions.kind(), segments = options.segments))]
pub fn generate_solid(dimensions: &SolidDimensions, options: &GeneratorOptions) -> Result<Solid> {
    let kind = dimensions.kind();
    validate_solid_dimensions(dimensions).into_result(kind)?;
    if kind.is_curved() && !(3..=MAX_SEGMENTS).contains(&options.segments) {
        return Err(GeometryError::InvalidSegments(options.segments));
    }

    let mesh = match *dimensions {
        SolidDimensions::Cube(d) => rectangular_prism(d.side, d.side, d.side)?,
        SolidDimensions::RectangularPrism(d) => rectangular_prism(d.length, d.width, d.height)?,
        SolidDimensions::TriangularPrism(d) => triangular_prism(&d)?,
        SolidDimensions::SquarePyramid(d) => square_pyramid(&d)?,
        SolidDimensions::TriangularPyramid(d) => triangular_pyramid(&d)?,
        SolidDimensions::Cylinder(d) => cylinder(&d, options.segments)?,
        SolidDimensions::Cone(d) => cone(&d, options.segments)?,
        SolidDimensions::Sphere(d) => {
            return Ok(Solid::Sphere(SphereGeometry {
                center: Point3D::origin(),
                radius: d.radius,
            }))
        }
    };

    Ok(Solid::Mesh(mesh))
}

/// Box of the given extents.
///
/// Vertices 0-3 are the bottom corners and 4-7 the top corners, each ring
/// starting at (-x, -z) and running counter-clockwise seen from below:
/// (-x,-z), (+x,-z), (+x,+z), (-x,+z). Faces are bottom, top, then the
/// sides -Z, +X, +Z, -X.
pub fn rectangular_prism(length: f64, width: f64, height: f64) -> Result<SolidGeometry> {
    let (hx, hz) = (length / 2.0, width / 2.0);
    let ring = [(-hx, -hz), (hx, -hz), (hx, hz), (-hx, hz)];
    extrude(&ring, height)
}

fn triangular_prism(d: &TriangularPrismDimensions) -> Result<SolidGeometry> {
    extrude(&isosceles_triangle(d.base_side, d.base_height), d.height)
}

/// Square pyramid: base corners 0-3 in the same order as a box's bottom
/// ring, apex 4.
fn square_pyramid(d: &SquarePyramidDimensions) -> Result<SolidGeometry> {
    let h = d.base_side / 2.0;
    let ring = [(-h, -h), (h, -h), (h, h), (-h, h)];
    pyramid(&ring, d.height)
}

/// Tetrahedron over an equilateral base whose circumradius is `side / sqrt(3)`.
fn triangular_pyramid(d: &TriangularPyramidDimensions) -> Result<SolidGeometry> {
    let circumradius = d.base_side / 3f64.sqrt();
    pyramid(&regular_polygon(3, circumradius, -FRAC_PI_2), d.height)
}

fn cylinder(d: &CylinderDimensions, segments: usize) -> Result<SolidGeometry> {
    extrude(&regular_polygon(segments, d.radius, 0.0), d.height)
}

fn cone(d: &ConeDimensions, segments: usize) -> Result<SolidGeometry> {
    pyramid(&regular_polygon(segments, d.radius, 0.0), d.height)
}

/// `n` points on a circle in the XZ plane, counter-clockwise from `start`
/// (radians, measured from +X toward +Z).
fn regular_polygon(n: usize, radius: f64, start: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|k| {
            let theta = start + TAU * k as f64 / n as f64;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Isosceles triangle centered on its centroid, base side parallel to X.
fn isosceles_triangle(base: f64, height: f64) -> Vec<(f64, f64)> {
    vec![
        (-base / 2.0, -height / 3.0),
        (base / 2.0, -height / 3.0),
        (0.0, 2.0 * height / 3.0),
    ]
}

/// Extrude a base ring along Y.
///
/// `ring` must be counter-clockwise in (x, z). Bottom ring is `0..n`, top
/// ring `n..2n`. The bottom face keeps ring order (CCW from below), the top
/// face reverses it, and side `i` is `[i, n+i, n+j, j]` with `j = i+1 mod n`.
/// Edges: bottom ring, top ring, then verticals.
fn extrude(ring: &[(f64, f64)], height: f64) -> Result<SolidGeometry> {
    let n = ring.len();
    let hy = height / 2.0;

    let mut vertices = Vec::with_capacity(2 * n);
    vertices.extend(ring.iter().map(|&(x, z)| Point3D::new(x, -hy, z)));
    vertices.extend(ring.iter().map(|&(x, z)| Point3D::new(x, hy, z)));

    let mut faces = Vec::with_capacity(n + 2);
    faces.push((0..n).collect());
    faces.push((n..2 * n).rev().collect());
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, n + i, n + j, j]);
    }

    let mut edges = Vec::with_capacity(3 * n);
    edges.extend((0..n).map(|i| (i, (i + 1) % n)));
    edges.extend((0..n).map(|i| (n + i, n + (i + 1) % n)));
    edges.extend((0..n).map(|i| (i, n + i)));

    SolidGeometry::new(vertices, faces, edges)
}

/// Close a base ring to a single apex above it.
///
/// Ring is `0..n` at the bottom, apex is `n`. Base face keeps ring order;
/// side `i` is `[i, n, j]`. Edges: base ring, then slants to the apex.
fn pyramid(ring: &[(f64, f64)], height: f64) -> Result<SolidGeometry> {
    let n = ring.len();
    let hy = height / 2.0;

    let mut vertices = Vec::with_capacity(n + 1);
    vertices.extend(ring.iter().map(|&(x, z)| Point3D::new(x, -hy, z)));
    vertices.push(Point3D::new(0.0, hy, 0.0));

    let mut faces = Vec::with_capacity(n + 1);
    faces.push((0..n).collect());
    for i in 0..n {
        faces.push(vec![i, n, (i + 1) % n]);
    }

    let mut edges = Vec::with_capacity(2 * n);
    edges.extend((0..n).map(|i| (i, (i + 1) % n)));
    edges.extend((0..n).map(|i| (i, n)));

    SolidGeometry::new(vertices, faces, edges)
}
