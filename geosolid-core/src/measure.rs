//! Volume and surface area formulas.
//!
//! Independent of mesh generation: every value comes straight from the
//! dimension record, curved solids use their exact formulas rather than the
//! tessellated approximation, and nothing is rounded.

use std::f64::consts::PI;

use crate::solid::{
    ConeDimensions, CubeDimensions, CylinderDimensions, RectangularPrismDimensions, SolidDimensions,
    SphereDimensions, SquarePyramidDimensions, TriangularPrismDimensions,
    TriangularPyramidDimensions,
};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub fn volume_cube(d: &CubeDimensions) -> f64 {
    d.side.powi(3)
}

pub fn surface_area_cube(d: &CubeDimensions) -> f64 {
    6.0 * d.side.powi(2)
}

pub fn volume_rectangular_prism(d: &RectangularPrismDimensions) -> f64 {
    d.length * d.width * d.height
}

pub fn surface_area_rectangular_prism(d: &RectangularPrismDimensions) -> f64 {
    2.0 * (d.length * d.width + d.length * d.height + d.width * d.height)
}

pub fn volume_triangular_prism(d: &TriangularPrismDimensions) -> f64 {
    d.base_side * d.base_height / 2.0 * d.height
}

/// Two triangular caps plus three rectangles; the two equal sides of the
/// isosceles base follow from its base side and height.
pub fn surface_area_triangular_prism(d: &TriangularPrismDimensions) -> f64 {
    let equal_side = (d.base_side / 2.0).hypot(d.base_height);
    let caps = d.base_side * d.base_height;
    caps + d.height * (d.base_side + 2.0 * equal_side)
}

pub fn volume_square_pyramid(d: &SquarePyramidDimensions) -> f64 {
    d.base_side.powi(2) * d.height / 3.0
}

pub fn surface_area_square_pyramid(d: &SquarePyramidDimensions) -> f64 {
    let slant = (d.base_side / 2.0).hypot(d.height);
    d.base_side.powi(2) + 2.0 * d.base_side * slant
}

fn equilateral_area(side: f64) -> f64 {
    SQRT_3 / 4.0 * side * side
}

pub fn volume_triangular_pyramid(d: &TriangularPyramidDimensions) -> f64 {
    equilateral_area(d.base_side) * d.height / 3.0
}

/// The apex sits over the base centroid, so each lateral face's height is
/// the hypotenuse of the pyramid height and the base inradius.
pub fn surface_area_triangular_pyramid(d: &TriangularPyramidDimensions) -> f64 {
    let inradius = d.base_side / (2.0 * SQRT_3);
    let slant = inradius.hypot(d.height);
    equilateral_area(d.base_side) + 1.5 * d.base_side * slant
}

pub fn volume_cylinder(d: &CylinderDimensions) -> f64 {
    PI * d.radius.powi(2) * d.height
}

pub fn surface_area_cylinder(d: &CylinderDimensions) -> f64 {
    2.0 * PI * d.radius * (d.radius + d.height)
}

pub fn volume_cone(d: &ConeDimensions) -> f64 {
    PI * d.radius.powi(2) * d.height / 3.0
}

pub fn surface_area_cone(d: &ConeDimensions) -> f64 {
    let slant = d.radius.hypot(d.height);
    PI * d.radius * (d.radius + slant)
}

pub fn volume_sphere(d: &SphereDimensions) -> f64 {
    4.0 / 3.0 * PI * d.radius.powi(3)
}

pub fn surface_area_sphere(d: &SphereDimensions) -> f64 {
    4.0 * PI * d.radius.powi(2)
}

pub fn volume(dimensions: &SolidDimensions) -> f64 {
    match dimensions {
        SolidDimensions::Cube(d) => volume_cube(d),
        SolidDimensions::RectangularPrism(d) => volume_rectangular_prism(d),
        SolidDimensions::TriangularPrism(d) => volume_triangular_prism(d),
        SolidDimensions::SquarePyramid(d) => volume_square_pyramid(d),
        SolidDimensions::TriangularPyramid(d) => volume_triangular_pyramid(d),
        SolidDimensions::Cylinder(d) => volume_cylinder(d),
        SolidDimensions::Cone(d) => volume_cone(d),
        SolidDimensions::Sphere(d) => volume_sphere(d),
    }
}

pub fn surface_area(dimensions: &SolidDimensions) -> f64 {
    match dimensions {
        SolidDimensions::Cube(d) => surface_area_cube(d),
        SolidDimensions::RectangularPrism(d) => surface_area_rectangular_prism(d),
        SolidDimensions::TriangularPrism(d) => surface_area_triangular_prism(d),
        SolidDimensions::SquarePyramid(d) => surface_area_square_pyramid(d),
        SolidDimensions::TriangularPyramid(d) => surface_area_triangular_pyramid(d),
        SolidDimensions::Cylinder(d) => surface_area_cylinder(d),
        SolidDimensions::Cone(d) => surface_area_cone(d),
        SolidDimensions::Sphere(d) => surface_area_sphere(d),
    }
}
