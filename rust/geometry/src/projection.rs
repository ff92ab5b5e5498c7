// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Projection planes
//!
//! Coplanar 3D input is flattened into the engine's 2D domain through a
//! plane basis; the default ground plane simply drops the z component.

use nalgebra::{Point2, Point3, Vector3};

use crate::coordinate::Coordinate;

/// A plane in 3D, defined by a point and a unit normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Point on the plane
    pub point: Point3<f64>,
    /// Normal vector (normalized)
    pub normal: Vector3<f64>,
}

impl Plane {
    /// Create a new plane
    ///
    /// Panics on a zero-length normal; a degenerate plane is a caller bug,
    /// not a recoverable condition.
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        let length = normal.norm();
        assert!(length > 0.0, "degenerate plane normal");
        Self {
            point,
            normal: normal / length,
        }
    }

    /// Plane through three points
    ///
    /// Panics if the points are collinear.
    pub fn from_points(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self::new(a, (b - a).cross(&(c - a)))
    }

    /// Signed distance from a point to the plane
    /// Positive = in front, Negative = behind
    #[inline]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        (point - self.point).dot(&self.normal)
    }

    /// Orthonormal basis spanning the plane
    ///
    /// Built against the coordinate axis least parallel to the normal for
    /// numerical stability.
    pub fn basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        let abs_x = self.normal.x.abs();
        let abs_y = self.normal.y.abs();
        let abs_z = self.normal.z.abs();

        let reference = if abs_x <= abs_y && abs_x <= abs_z {
            Vector3::new(1.0, 0.0, 0.0)
        } else if abs_y <= abs_z {
            Vector3::new(0.0, 1.0, 0.0)
        } else {
            Vector3::new(0.0, 0.0, 1.0)
        };

        let u_axis = self.normal.cross(&reference).normalize();
        let v_axis = self.normal.cross(&u_axis);
        (u_axis, v_axis)
    }

    /// Map a 3D point to plane coordinates
    pub fn to_2d(&self, point: &Point3<f64>) -> Point2<f64> {
        let (u_axis, v_axis) = self.basis();
        let offset = point - self.point;
        Point2::new(offset.dot(&u_axis), offset.dot(&v_axis))
    }

    /// Map plane coordinates back to 3D
    pub fn to_3d(&self, point: &Point2<f64>) -> Point3<f64> {
        let (u_axis, v_axis) = self.basis();
        self.point + u_axis * point.x + v_axis * point.y
    }
}

/// The 3D-to-2D mapping applied before engine insertion
///
/// "No plane set" is a defined state with ground-plane behavior, not an
/// error, so it is a variant rather than an `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProjectionPlane {
    /// Canonical ground plane: z is dropped
    #[default]
    Ground,
    /// Explicit plane: points are mapped through the plane basis
    Oblique(Plane),
}

impl ProjectionPlane {
    /// Project a coordinate into the engine's 2D domain
    ///
    /// Returns `None` only for the empty coordinate.
    pub fn project(&self, coordinate: &Coordinate) -> Option<Point2<f64>> {
        match self {
            Self::Ground => coordinate.point2(),
            Self::Oblique(plane) => Some(plane.to_2d(&coordinate.point3()?)),
        }
    }

    /// The plane in effect; `Ground` materializes as z = 0
    pub fn plane(&self) -> Plane {
        match self {
            Self::Ground => Plane::new(Point3::origin(), Vector3::z()),
            Self::Oblique(plane) => *plane,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_normal_is_normalized() {
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 10.0));
        assert_relative_eq!(plane.normal.norm(), 1.0);
    }

    #[test]
    #[should_panic(expected = "degenerate plane normal")]
    fn test_degenerate_normal_panics() {
        Plane::new(Point3::origin(), Vector3::zeros());
    }

    #[test]
    #[should_panic(expected = "degenerate plane normal")]
    fn test_collinear_points_panic() {
        Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let plane = Plane::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.5, 1.0));
        let (u_axis, v_axis) = plane.basis();
        assert_abs_diff_eq!(u_axis.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v_axis.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u_axis.dot(&v_axis), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u_axis.dot(&plane.normal), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v_axis.dot(&plane.normal), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_on_plane() {
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 1.0),
        );
        let point = Point3::new(0.25, 0.75, 1.25);
        assert_abs_diff_eq!(plane.signed_distance(&point), 0.0, epsilon = 1e-12);

        let recovered = plane.to_3d(&plane.to_2d(&point));
        assert_relative_eq!(recovered, point, epsilon = 1e-12);
    }

    #[test]
    fn test_ground_projection_drops_z() {
        let projection = ProjectionPlane::Ground;
        let projected = projection.project(&Coordinate::xyz(3.0, 4.0, 99.0)).unwrap();
        assert_eq!(projected, Point2::new(3.0, 4.0));
        assert!(projection.project(&Coordinate::Empty).is_none());
    }

    #[test]
    fn test_ground_plane_materializes_as_z_zero() {
        let plane = ProjectionPlane::Ground.plane();
        assert_eq!(plane.point, Point3::origin());
        assert_eq!(plane.normal, Vector3::z());
    }

    #[test]
    fn test_oblique_projection_preserves_in_plane_distances() {
        let plane = Plane::new(Point3::origin(), Vector3::new(-1.0, 0.0, 1.0));
        let projection = ProjectionPlane::Oblique(plane);

        // Both points lie on z = x
        let a = projection.project(&Coordinate::xyz(0.0, 0.0, 0.0)).unwrap();
        let b = projection.project(&Coordinate::xyz(1.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!((b - a).norm(), std::f64::consts::SQRT_2, epsilon = 1e-12);
    }
}
