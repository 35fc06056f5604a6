//! Dimension checks run before mesh generation

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::solid::{
    ConeDimensions, CubeDimensions, CylinderDimensions, RectangularPrismDimensions, SolidDimensions,
    SolidKind, SphereDimensions, SquarePyramidDimensions, TriangularPrismDimensions,
    TriangularPyramidDimensions,
};

/// Outcome of a dimension check. `error` carries a message meant for the
/// end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }

    /// Turn a failed check into [`GeometryError::InvalidDimensions`].
    pub fn into_result(self, solid: SolidKind) -> Result<()> {
        if self.valid {
            return Ok(());
        }
        Err(GeometryError::InvalidDimensions {
            solid,
            message: self.error.unwrap_or_default(),
        })
    }
}

impl From<std::result::Result<(), String>> for ValidationResult {
    fn from(checks: std::result::Result<(), String>) -> Self {
        match checks {
            Ok(()) => Self::ok(),
            Err(message) => Self::invalid(message),
        }
    }
}

/// `value` must be finite and strictly positive. `field` is the subject of
/// the message, article included ("El lado", "La altura").
fn positive(value: f64, field: &str) -> std::result::Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{field} debe ser un número finito"));
    }
    if value <= 0.0 {
        return Err(format!("{field} debe ser mayor que 0"));
    }
    Ok(())
}

pub fn validate_cube_dimensions(d: &CubeDimensions) -> ValidationResult {
    positive(d.side, "El lado").into()
}

pub fn validate_rectangular_prism_dimensions(d: &RectangularPrismDimensions) -> ValidationResult {
    positive(d.length, "El largo")
        .and_then(|_| positive(d.width, "El ancho"))
        .and_then(|_| positive(d.height, "El alto"))
        .into()
}

pub fn validate_triangular_prism_dimensions(d: &TriangularPrismDimensions) -> ValidationResult {
    positive(d.base_side, "El lado de la base")
        .and_then(|_| positive(d.base_height, "La altura de la base"))
        .and_then(|_| positive(d.height, "La altura"))
        .into()
}

pub fn validate_square_pyramid_dimensions(d: &SquarePyramidDimensions) -> ValidationResult {
    positive(d.base_side, "El lado de la base")
        .and_then(|_| positive(d.height, "La altura"))
        .into()
}

pub fn validate_triangular_pyramid_dimensions(d: &TriangularPyramidDimensions) -> ValidationResult {
    positive(d.base_side, "El lado de la base")
        .and_then(|_| positive(d.height, "La altura"))
        .into()
}

pub fn validate_cylinder_dimensions(d: &CylinderDimensions) -> ValidationResult {
    positive(d.radius, "El radio")
        .and_then(|_| positive(d.height, "La altura"))
        .into()
}

pub fn validate_cone_dimensions(d: &ConeDimensions) -> ValidationResult {
    positive(d.radius, "El radio")
        .and_then(|_| positive(d.height, "La altura"))
        .into()
}

pub fn validate_sphere_dimensions(d: &SphereDimensions) -> ValidationResult {
    positive(d.radius, "El radio").into()
}

/// Route `dimensions` to the validator for its solid.
pub fn validate_solid_dimensions(dimensions: &SolidDimensions) -> ValidationResult {
    match dimensions {
        SolidDimensions::Cube(d) => validate_cube_dimensions(d),
        SolidDimensions::RectangularPrism(d) => validate_rectangular_prism_dimensions(d),
        SolidDimensions::TriangularPrism(d) => validate_triangular_prism_dimensions(d),
        SolidDimensions::SquarePyramid(d) => validate_square_pyramid_dimensions(d),
        SolidDimensions::TriangularPyramid(d) => validate_triangular_pyramid_dimensions(d),
        SolidDimensions::Cylinder(d) => validate_cylinder_dimensions(d),
        SolidDimensions::Cone(d) => validate_cone_dimensions(d),
        SolidDimensions::Sphere(d) => validate_sphere_dimensions(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_boundary() {
        assert!(!validate_cube_dimensions(&CubeDimensions { side: 0.0 }).valid);
        assert!(!validate_cube_dimensions(&CubeDimensions { side: -1.0 }).valid);
        assert!(validate_cube_dimensions(&CubeDimensions { side: 0.0001 }).valid);
    }

    #[test]
    fn test_message_names_the_failing_field() {
        let result = validate_rectangular_prism_dimensions(&RectangularPrismDimensions {
            length: 2.0,
            width: -3.0,
            height: 0.0,
        });
        assert_eq!(
            result,
            ValidationResult::invalid("El ancho debe ser mayor que 0")
        );

        let result = validate_cone_dimensions(&ConeDimensions {
            radius: 1.0,
            height: 0.0,
        });
        assert_eq!(result.error.as_deref(), Some("La altura debe ser mayor que 0"));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = validate_sphere_dimensions(&SphereDimensions { radius: value });
            assert_eq!(result.error.as_deref(), Some("El radio debe ser un número finito"));
        }
    }

    #[test]
    fn test_dispatch_matches_per_solid_validators() {
        let good = SolidDimensions::TriangularPrism(TriangularPrismDimensions {
            base_side: 1.0,
            base_height: 1.0,
            height: 1.0,
        });
        assert_eq!(validate_solid_dimensions(&good), ValidationResult::ok());

        let bad = SolidDimensions::SquarePyramid(SquarePyramidDimensions {
            base_side: 0.0,
            height: 1.0,
        });
        assert_eq!(
            validate_solid_dimensions(&bad),
            ValidationResult::invalid("El lado de la base debe ser mayor que 0")
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationResult::ok().into_result(SolidKind::Cube), Ok(()));
        let err = ValidationResult::invalid("El radio debe ser mayor que 0")
            .into_result(SolidKind::Sphere)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid esfera dimensions: El radio debe ser mayor que 0"
        );
    }

    #[test]
    fn test_wire_format_omits_missing_error() {
        let json = serde_json::to_value(ValidationResult::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"valid": true}));
    }
}
