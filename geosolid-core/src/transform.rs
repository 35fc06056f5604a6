//! Degree-based rotations and the azimuth/elevation view rotation

use nalgebra::{Rotation3, Vector3};

use crate::geometry::Point3D;

/// Rotate `point` about the X axis by `degrees`.
pub fn rotate_x(point: &Point3D, degrees: f64) -> Point3D {
    Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.to_radians()) * point
}

/// Rotate `point` about the Y axis by `degrees`.
pub fn rotate_y(point: &Point3D, degrees: f64) -> Point3D {
    Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.to_radians()) * point
}

/// Rotate `point` about the Z axis by `degrees`.
pub fn rotate_z(point: &Point3D, degrees: f64) -> Point3D {
    Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.to_radians()) * point
}

/// Apply the view rotation: Y by `azimuth`, then X by `elevation`.
pub fn rotate_point(point: &Point3D, azimuth: f64, elevation: f64) -> Point3D {
    ViewRotation::new(azimuth, elevation).apply(point)
}

/// Camera orientation as a precomputed rotation.
///
/// Projection and visibility both rotate through the same `ViewRotation`,
/// so the silhouette and the front/back classification always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRotation {
    azimuth: f64,
    elevation: f64,
    matrix: Rotation3<f64>,
}

impl ViewRotation {
    pub fn new(azimuth: f64, elevation: f64) -> Self {
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), azimuth.to_radians());
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), elevation.to_radians());
        Self {
            azimuth,
            elevation,
            // Applied right to left: yaw first, then pitch
            matrix: pitch * yaw,
        }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn apply(&self, point: &Point3D) -> Point3D {
        self.matrix * point
    }

    pub fn apply_vec(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * v
    }

    pub fn matrix(&self) -> &Rotation3<f64> {
        &self.matrix
    }
}

impl Default for ViewRotation {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-12;

    fn assert_point_eq(a: &Point3D, b: &Point3D) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPS);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPS);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPS);
    }

    #[test]
    fn test_axis_rotations_are_right_handed() {
        // +90 about X takes +Y to +Z
        assert_point_eq(&rotate_x(&Point3D::new(0.0, 1.0, 0.0), 90.0), &Point3D::new(0.0, 0.0, 1.0));
        // +90 about Y takes +Z to +X
        assert_point_eq(&rotate_y(&Point3D::new(0.0, 0.0, 1.0), 90.0), &Point3D::new(1.0, 0.0, 0.0));
        // +90 about Z takes +X to +Y
        assert_point_eq(&rotate_z(&Point3D::new(1.0, 0.0, 0.0), 90.0), &Point3D::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_identity_rotation() {
        let p = Point3D::new(1.5, -2.0, 3.25);
        assert_point_eq(&rotate_point(&p, 0.0, 0.0), &p);
        assert_point_eq(&ViewRotation::identity().apply(&p), &p);
    }

    #[test]
    fn test_rotation_order_is_yaw_then_pitch() {
        let p = Point3D::new(1.0, 0.0, 0.0);
        // Yaw 90 moves +X to -Z, pitch 90 then moves -Z to +Y
        assert_point_eq(&rotate_point(&p, 90.0, 90.0), &Point3D::new(0.0, 1.0, 0.0));
        // The opposite order would leave +X on the X axis before the yaw
        let reversed = rotate_y(&rotate_x(&p, 90.0), 90.0);
        assert_point_eq(&reversed, &Point3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_view_rotation_keeps_its_angles() {
        let view = ViewRotation::new(42.0, 20.0);
        assert_eq!(view.azimuth(), 42.0);
        assert_eq!(view.elevation(), 20.0);
        assert_eq!(ViewRotation::default(), ViewRotation::identity());
    }

    #[test]
    fn test_directions_rotate_like_points() {
        let view = ViewRotation::new(30.0, -15.0);
        let v = Vector3::new(1.0, -2.0, 0.5);
        let moved = view.apply(&Point3D::from(v));
        assert_abs_diff_eq!(view.apply_vec(&v), moved.coords, epsilon = 1e-12);
        assert_abs_diff_eq!(*view.matrix() * v, moved.coords, epsilon = 1e-12);

        // Rotations preserve length
        assert_abs_diff_eq!(view.apply_vec(&v).norm(), v.norm(), epsilon = 1e-12);
    }

    #[test]
    fn test_view_rotation_matches_axis_composition() {
        let view = ViewRotation::new(45.0, 35.264);
        for p in [
            Point3D::new(1.0, 2.0, 3.0),
            Point3D::new(-50.0, 50.0, -50.0),
            Point3D::new(0.25, -0.5, 10.0),
        ] {
            let stepwise = rotate_x(&rotate_y(&p, 45.0), 35.264);
            assert_abs_diff_eq!(view.apply(&p).x, stepwise.x, epsilon = 1e-9);
            assert_abs_diff_eq!(view.apply(&p).y, stepwise.y, epsilon = 1e-9);
            assert_abs_diff_eq!(view.apply(&p).z, stepwise.z, epsilon = 1e-9);
            assert_eq!(view.apply(&p), rotate_point(&p, 45.0, 35.264));
        }
    }
}
