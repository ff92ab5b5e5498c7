// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Original-position coordinates
//!
//! The triangulation engine works on projected 2D positions; every vertex
//! additionally carries the coordinate it was inserted with, so extracted
//! triangles reference the caller's original (possibly 3D) space.

use nalgebra::{Point2, Point3};

/// A 2D or 3D position, or the empty sentinel
///
/// `Empty` represents "no original position". It cannot be inserted into a
/// triangulation; it only appears on engine vertices synthesized by
/// constraint splitting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Coordinate {
    /// No position
    #[default]
    Empty,
    /// Planar position
    TwoD(Point2<f64>),
    /// Spatial position
    ThreeD(Point3<f64>),
}

impl Coordinate {
    /// Create a 2D coordinate
    #[inline]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::TwoD(Point2::new(x, y))
    }

    /// Create a 3D coordinate
    #[inline]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::ThreeD(Point3::new(x, y, z))
    }

    /// True for the empty sentinel
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for spatial coordinates
    #[inline]
    pub fn is_3d(&self) -> bool {
        matches!(self, Self::ThreeD(_))
    }

    /// Planar view; 3D coordinates drop their z component
    pub fn point2(&self) -> Option<Point2<f64>> {
        match self {
            Self::Empty => None,
            Self::TwoD(p) => Some(*p),
            Self::ThreeD(p) => Some(Point2::new(p.x, p.y)),
        }
    }

    /// Spatial view; 2D coordinates gain z = 0
    pub fn point3(&self) -> Option<Point3<f64>> {
        match self {
            Self::Empty => None,
            Self::TwoD(p) => Some(Point3::new(p.x, p.y, 0.0)),
            Self::ThreeD(p) => Some(*p),
        }
    }
}

impl From<Point2<f64>> for Coordinate {
    fn from(point: Point2<f64>) -> Self {
        Self::TwoD(point)
    }
}

impl From<Point3<f64>> for Coordinate {
    fn from(point: Point3<f64>) -> Self {
        Self::ThreeD(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        let coordinate = Coordinate::default();
        assert!(coordinate.is_empty());
        assert!(coordinate.point2().is_none());
        assert!(coordinate.point3().is_none());
    }

    #[test]
    fn test_planar_view_drops_z() {
        let coordinate = Coordinate::xyz(1.0, 2.0, 3.0);
        assert!(coordinate.is_3d());
        assert_eq!(coordinate.point2(), Some(Point2::new(1.0, 2.0)));
    }

    #[test]
    fn test_spatial_view_lifts_to_zero() {
        let coordinate = Coordinate::xy(1.0, 2.0);
        assert!(!coordinate.is_3d());
        assert_eq!(coordinate.point3(), Some(Point3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_from_points() {
        assert_eq!(
            Coordinate::from(Point2::new(4.0, 5.0)),
            Coordinate::xy(4.0, 5.0)
        );
        assert_eq!(
            Coordinate::from(Point3::new(4.0, 5.0, 6.0)),
            Coordinate::xyz(4.0, 5.0, 6.0)
        );
    }
}
