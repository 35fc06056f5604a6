//! Projection families and 3D to 2D screen mapping

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Point3D;
use crate::transform::{rotate_point, ViewRotation};

/// Elevation of the true isometric view: atan(1 / sqrt(2)) in degrees.
pub const ISOMETRIC_ELEVATION: f64 = 35.264_389_682_754_654;

/// Named projection conventions from technical drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    #[default]
    Isometric,
    Cavalier,
    Cabinet,
    Dimetric,
}

impl ProjectionKind {
    /// Canonical `(azimuth, elevation, scale)` of the family.
    pub fn defaults(&self) -> (f64, f64, f64) {
        match self {
            ProjectionKind::Isometric => (45.0, ISOMETRIC_ELEVATION, 1.0),
            ProjectionKind::Cavalier => (45.0, 0.0, 1.0),
            ProjectionKind::Cabinet => (45.0, 0.0, 0.5),
            ProjectionKind::Dimetric => (42.0, 20.0, 0.5),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ProjectionKind::Isometric => "isometric",
            ProjectionKind::Cavalier => "cavalier",
            ProjectionKind::Cabinet => "cabinet",
            ProjectionKind::Dimetric => "dimetric",
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "isometric" => Ok(ProjectionKind::Isometric),
            "cavalier" => Ok(ProjectionKind::Cavalier),
            "cabinet" => Ok(ProjectionKind::Cabinet),
            "dimetric" => Ok(ProjectionKind::Dimetric),
            _ => Err(GeometryError::UnknownProjection(s.to_string())),
        }
    }
}

/// Fully resolved view settings. Angles are in degrees.
///
/// The camera always looks at the origin; `azimuth` and `elevation` alone
/// decide the view rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(rename = "type")]
    pub kind: ProjectionKind,
    pub azimuth: f64,
    pub elevation: f64,
    pub scale: f64,
}

impl ProjectionConfig {
    pub fn new(kind: ProjectionKind) -> Self {
        let (azimuth, elevation, scale) = kind.defaults();
        Self {
            kind,
            azimuth,
            elevation,
            scale,
        }
    }

    pub fn rotation(&self) -> ViewRotation {
        ViewRotation::new(self.azimuth, self.elevation)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::new(ProjectionKind::default())
    }
}

impl From<ProjectionKind> for ProjectionConfig {
    fn from(kind: ProjectionKind) -> Self {
        Self::new(kind)
    }
}

/// A projection family with optional per-field overrides, as callers
/// supply it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionOptions {
    #[serde(rename = "type", default)]
    pub kind: ProjectionKind,
    #[serde(default)]
    pub azimuth: Option<f64>,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub scale: Option<f64>,
}

impl From<ProjectionKind> for ProjectionOptions {
    fn from(kind: ProjectionKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

impl From<ProjectionConfig> for ProjectionOptions {
    fn from(config: ProjectionConfig) -> Self {
        Self {
            kind: config.kind,
            azimuth: Some(config.azimuth),
            elevation: Some(config.elevation),
            scale: Some(config.scale),
        }
    }
}

/// Fill in the family defaults for anything the caller left out.
pub fn normalize_projection_config(options: impl Into<ProjectionOptions>) -> ProjectionConfig {
    let options = options.into();
    let defaults = ProjectionConfig::new(options.kind);
    ProjectionConfig {
        kind: options.kind,
        azimuth: options.azimuth.unwrap_or(defaults.azimuth),
        elevation: options.elevation.unwrap_or(defaults.elevation),
        scale: options.scale.unwrap_or(defaults.scale),
    }
}

/// A plain 2D point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A vertex after projection.
///
/// `x`/`y` are screen coordinates (Y grows downward), `depth` is the
/// view-space Z (larger is nearer the viewer). `visible` is `true` until the
/// visibility stage says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub visible: bool,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64, depth: f64) -> Self {
        Self {
            x,
            y,
            depth,
            visible: true,
        }
    }

    pub fn to_point2d(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Classic isometric drawing: X and Z recede at 30 degrees from horizontal.
pub fn project_isometric(point: &Point3D) -> Point2D {
    let (sin, cos) = 30f64.to_radians().sin_cos();
    Point2D::new((point.x - point.z) * cos, (point.x + point.z) * sin - point.y)
}

/// Oblique projection with the receding axis at 45 degrees, scaled by
/// `depth_scale`. Points further from the viewer (negative Z) move up and
/// to the right.
fn project_oblique(point: &Point3D, depth_scale: f64) -> Point2D {
    let (sin, cos) = 45f64.to_radians().sin_cos();
    let recede = -point.z * depth_scale;
    Point2D::new(point.x + recede * cos, -point.y - recede * sin)
}

/// Cavalier oblique projection: depth drawn at full length.
pub fn project_cavalier(point: &Point3D) -> Point2D {
    project_oblique(point, 1.0)
}

/// Cabinet oblique projection: depth drawn at half length.
pub fn project_cabinet(point: &Point3D) -> Point2D {
    project_oblique(point, 0.5)
}

/// Rotate `point` into view space and drop it orthographically.
pub fn project_with_rotation(point: &Point3D, azimuth: f64, elevation: f64) -> ProjectedPoint {
    from_view_space(&rotate_point(point, azimuth, elevation))
}

/// Orthographic drop of an already rotated point. Screen Y is flipped
/// because model Y points up.
pub(crate) fn from_view_space(rotated: &Point3D) -> ProjectedPoint {
    ProjectedPoint::new(rotated.x, -rotated.y, rotated.z)
}

/// Map a view-space point to screen space around `(center_x, center_y)`.
pub(crate) fn to_screen(
    rotated: &Point3D,
    config: &ProjectionConfig,
    center_x: f64,
    center_y: f64,
    scale: f64,
) -> ProjectedPoint {
    let p = from_view_space(rotated);
    let factor = scale * config.scale;
    ProjectedPoint::new(center_x + p.x * factor, center_y + p.y * factor, p.depth)
}

/// Project one point through the view rotation of `config`.
///
/// The effective scale is `scale * config.scale`; depth is left unscaled.
pub fn project_3d_to_2d(
    point: &Point3D,
    config: &ProjectionConfig,
    center_x: f64,
    center_y: f64,
    scale: f64,
) -> ProjectedPoint {
    to_screen(&config.rotation().apply(point), config, center_x, center_y, scale)
}

/// Project every vertex, keeping the input order.
pub fn project_vertices(
    vertices: &[Point3D],
    config: &ProjectionConfig,
    center_x: f64,
    center_y: f64,
    scale: f64,
) -> Vec<ProjectedPoint> {
    let rotation = config.rotation();
    vertices
        .iter()
        .map(|v| to_screen(&rotation.apply(v), config, center_x, center_y, scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity_rotation_flips_y() {
        let p = Point3D::new(3.0, 4.0, -5.0);
        let projected = project_with_rotation(&p, 0.0, 0.0);
        assert_eq!(projected.x, 3.0);
        assert_eq!(projected.y, -4.0);
        assert_eq!(projected.depth, -5.0);
        assert!(projected.visible);
    }

    #[test]
    fn test_family_defaults() {
        let iso = ProjectionConfig::new(ProjectionKind::Isometric);
        assert_eq!(iso.azimuth, 45.0);
        assert_abs_diff_eq!(iso.elevation, 35.264, epsilon = 1e-3);
        assert_abs_diff_eq!(
            iso.elevation.to_radians(),
            (1.0 / 2f64.sqrt()).atan(),
            epsilon = 1e-12
        );
        assert_eq!(iso.scale, 1.0);

        assert_eq!(ProjectionKind::Cavalier.defaults(), (45.0, 0.0, 1.0));
        assert_eq!(ProjectionKind::Cabinet.defaults(), (45.0, 0.0, 0.5));
        assert_eq!(ProjectionKind::Dimetric.defaults(), (42.0, 20.0, 0.5));
    }

    #[test]
    fn test_normalize_overrides_take_precedence() {
        let config = normalize_projection_config(ProjectionOptions {
            kind: ProjectionKind::Cabinet,
            azimuth: Some(30.0),
            elevation: None,
            scale: None,
        });
        assert_eq!(config.kind, ProjectionKind::Cabinet);
        assert_eq!(config.azimuth, 30.0);
        assert_eq!(config.elevation, 0.0);
        assert_eq!(config.scale, 0.5);

        assert_eq!(
            normalize_projection_config(ProjectionKind::Dimetric),
            ProjectionConfig::new(ProjectionKind::Dimetric)
        );
    }

    #[test]
    fn test_normalize_from_json_shorthand() {
        let options: ProjectionOptions =
            serde_json::from_str(r#"{"type": "dimetric", "elevation": 10}"#).unwrap();
        let config = normalize_projection_config(options);
        assert_eq!(config.azimuth, 42.0);
        assert_eq!(config.elevation, 10.0);
        assert_eq!(config.scale, 0.5);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Cavalier".parse::<ProjectionKind>().unwrap(), ProjectionKind::Cavalier);
        assert_eq!(ProjectionKind::Isometric.to_string(), "isometric");
        assert!(matches!(
            "perspective".parse::<ProjectionKind>(),
            Err(GeometryError::UnknownProjection(_))
        ));
    }

    #[test]
    fn test_isometric_shortcut_axes() {
        // The three unit axes land 120 degrees apart
        let x = project_isometric(&Point3D::new(1.0, 0.0, 0.0));
        let y = project_isometric(&Point3D::new(0.0, 1.0, 0.0));
        let z = project_isometric(&Point3D::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(y.x, 0.0);
        assert_abs_diff_eq!(y.y, -1.0);
        assert_abs_diff_eq!(x.x, -z.x, epsilon = 1e-12);
        assert_abs_diff_eq!(x.y, z.y, epsilon = 1e-12);
        assert_abs_diff_eq!(x.x.hypot(x.y), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_oblique_depth_scale() {
        let far = Point3D::new(0.0, 0.0, -2.0);
        let cavalier = project_cavalier(&far);
        let cabinet = project_cabinet(&far);
        assert_abs_diff_eq!(cavalier.x.hypot(cavalier.y), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cabinet.x.hypot(cabinet.y), 1.0, epsilon = 1e-12);
        assert!(cavalier.x > 0.0 && cavalier.y < 0.0);

        // Front plane is drawn true size
        let front = project_cavalier(&Point3D::new(2.0, 3.0, 0.0));
        assert_abs_diff_eq!(front.x, 2.0);
        assert_abs_diff_eq!(front.y, -3.0);
    }

    #[test]
    fn test_project_applies_center_and_scale() {
        let config = ProjectionConfig {
            kind: ProjectionKind::Cabinet,
            azimuth: 0.0,
            elevation: 0.0,
            scale: 0.5,
        };
        let p = project_3d_to_2d(&Point3D::new(10.0, 20.0, 30.0), &config, 100.0, 50.0, 4.0);
        assert_abs_diff_eq!(p.x, 120.0);
        assert_abs_diff_eq!(p.y, 10.0);
        assert_abs_diff_eq!(p.depth, 30.0);
    }

    #[test]
    fn test_project_vertices_keeps_order() {
        let config = ProjectionConfig::default();
        let vertices = [
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(0.0, 0.0, 1.0),
        ];
        let projected = project_vertices(&vertices, &config, 200.0, 200.0, 1.0);
        assert_eq!(projected.len(), 3);
        for (v, p) in vertices.iter().zip(&projected) {
            assert_eq!(*p, project_3d_to_2d(v, &config, 200.0, 200.0, 1.0));
        }
    }
}
